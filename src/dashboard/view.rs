//! Render-ready description of a widget's body.
//!
//! Widgets project snapshot fields into this small vocabulary; the Leptos
//! layer turns it into markup. Text is inserted as text nodes, except
//! [`WidgetView::Markup`], which is already escaped.

use crate::util::escape::text_to_html;
use crate::util::format::clamp_percent;

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetView {
    Text(Text),
    /// Escaped HTML, line breaks as `<br>`.
    Markup { class: &'static str, html: String },
    Meter(Meter),
    Tags(Vec<Tag>),
    Fields(Vec<Field>),
    Check(Check),
    Messages(Vec<MessageRow>),
    Words(Vec<Word>),
    Notices(Vec<Notice>),
    Placeholder(&'static str),
    Stack(Vec<WidgetView>),
}

impl WidgetView {
    pub fn text(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self::Text(Text::new(text, class))
    }

    /// Escape user-supplied `text` for insertion as markup.
    pub fn markup(class: &'static str, text: &str) -> Self {
        Self::Markup { class, html: text_to_html(text) }
    }

    /// Flatten a one-element stack into its element.
    pub fn stack(mut items: Vec<WidgetView>) -> Self {
        if items.len() == 1 {
            if let Some(only) = items.pop() {
                return only;
            }
        }
        Self::Stack(items)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub text: String,
    pub class: String,
    pub color: Option<&'static str>,
}

impl Text {
    pub fn new(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self { text: text.into(), class: class.into(), color: None }
    }

    #[must_use]
    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }
}

/// Numeric label plus a proportional fill bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Meter {
    pub label: String,
    /// Fill width in percent, always within 0..=100.
    pub fill: f64,
    pub class: String,
    pub color: Option<&'static str>,
}

impl Meter {
    pub fn new(label: impl Into<String>, fill: f64, class: impl Into<String>) -> Self {
        Self { label: label.into(), fill: clamp_percent(fill), class: class.into(), color: None }
    }

    #[must_use]
    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    /// CSS for the fill element.
    pub fn fill_style(&self) -> String {
        match self.color {
            Some(color) => format!("width: {}%; background: {color}", self.fill),
            None => format!("width: {}%", self.fill),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub text: String,
    pub class: String,
}

impl Tag {
    pub fn new(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self { text: text.into(), class: class.into() }
    }
}

/// Labeled section.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub label: String,
    pub value: WidgetView,
}

impl Field {
    pub fn new(label: impl Into<String>, value: WidgetView) -> Self {
        Self { label: label.into(), value }
    }
}

/// Pass/fail security check row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub icon: &'static str,
    pub status: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageRow {
    pub username: String,
    pub time: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub text: String,
    pub font_px: f64,
    pub opacity: f64,
}

impl Word {
    pub fn style(&self) -> String {
        format!("font-size: {}px; opacity: {}", self.font_px, self.opacity)
    }
}

/// Server notification row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub icon: &'static str,
    pub message: String,
    pub kind: String,
    pub class: String,
}
