//! Markup for [`WidgetView`] bodies.

use leptos::prelude::*;

use crate::dashboard::view::{Check, Meter, MessageRow, Notice, Text, WidgetView, Word};

/// Render a widget body. Recursive for fields and stacks.
pub fn render_view(view: WidgetView) -> AnyView {
    match view {
        WidgetView::Text(text) => render_text(text),
        WidgetView::Markup { class, html } => view! { <div class=class inner_html=html></div> }.into_any(),
        WidgetView::Meter(meter) => render_meter(meter),
        WidgetView::Tags(tags) => view! {
            <div class="tag-list">
                {tags.into_iter().map(|tag| view! { <span class=tag.class>{tag.text}</span> }).collect_view()}
            </div>
        }
        .into_any(),
        WidgetView::Fields(fields) => view! {
            <div class="field-list">
                {fields
                    .into_iter()
                    .map(|field| {
                        view! {
                            <div class="field">
                                <div class="field-label">{field.label}</div>
                                {render_view(field.value)}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        WidgetView::Check(check) => render_check(check),
        WidgetView::Messages(rows) => view! {
            <div class="message-history">{rows.into_iter().map(render_message_row).collect_view()}</div>
        }
        .into_any(),
        WidgetView::Words(words) => view! {
            <div class="wordcloud">{words.into_iter().map(render_word).collect_view()}</div>
        }
        .into_any(),
        WidgetView::Notices(notices) => view! {
            <div class="notification-list">{notices.into_iter().map(render_notice).collect_view()}</div>
        }
        .into_any(),
        WidgetView::Placeholder(text) => view! { <p class="placeholder">{text}</p> }.into_any(),
        WidgetView::Stack(items) => view! {
            <div class="widget-stack">{items.into_iter().map(render_view).collect_view()}</div>
        }
        .into_any(),
    }
}

fn render_text(text: Text) -> AnyView {
    let style = text.color.map_or_else(String::new, |color| format!("color: {color}"));
    view! { <span class=text.class style=style>{text.text}</span> }.into_any()
}

fn render_meter(meter: Meter) -> AnyView {
    let fill_style = meter.fill_style();
    view! {
        <div class=format!("meter {}", meter.class)>
            <span class="meter-label">{meter.label}</span>
            <div class="meter-bar">
                <div class="meter-fill" style=fill_style></div>
            </div>
        </div>
    }
    .into_any()
}

fn render_check(check: Check) -> AnyView {
    view! {
        <div class="security-check">
            <span class="check-name">{check.name}</span>
            <span class="check-icon">{check.icon}</span>
            <span class=format!("check-status {}", check.class)>{check.status}</span>
        </div>
    }
    .into_any()
}

fn render_message_row(row: MessageRow) -> impl IntoView {
    view! {
        <div class="intercepted-message">
            <div class="msg-header">
                <span class="msg-user">{row.username}</span>
                <span class="msg-time">{row.time}</span>
            </div>
            <div class="msg-text">{row.text}</div>
        </div>
    }
}

fn render_word(word: Word) -> impl IntoView {
    let style = word.style();
    view! { <span class="word-cloud-word" style=style>{word.text}</span> }
}

fn render_notice(notice: Notice) -> impl IntoView {
    view! {
        <div class=notice.class>
            <span class="notif-icon">{notice.icon}</span>
            <span class="notif-message">{notice.message}</span>
            <span class="notif-type">{notice.kind}</span>
        </div>
    }
}
