#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::PreferenceStore;

/// Light/dark color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph shown on the toggle button: the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// Current theme bound to the storage key it persists under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    key: String,
}

impl ThemeState {
    /// Read the persisted preference, falling back to light.
    pub fn load(store: &impl PreferenceStore, key: &str) -> Self {
        let theme = store
            .load(key)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default();
        Self { theme, key: key.to_owned() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Switch to `theme` and persist it. Returns `false` when it was already
    /// active, in which case nothing is written.
    pub fn set(&mut self, theme: Theme, store: &mut impl PreferenceStore) -> bool {
        if self.theme == theme {
            return false;
        }
        self.theme = theme;
        store.save(&self.key, theme.as_str());
        true
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> Theme {
        let next = self.theme.toggled();
        self.set(next, store);
        next
    }
}
