//! Theme initialization and toggle against the live document.
//!
//! Reads the preference from `localStorage` and mirrors it onto the `<html>`
//! element as both a `data-theme` attribute and a `.dark-mode` class. Toggle
//! writes back to `localStorage`. Outside the browser DOM writes no-op.

use crate::state::theme::{Theme, ThemeState};
use crate::util::storage::LocalStorage;

/// Load the persisted theme and apply it to the document.
pub fn init(key: &str) -> ThemeState {
    let state = ThemeState::load(&LocalStorage, key);
    apply(state.theme);
    state
}

/// Reflect `theme` on the `<html>` element. Re-applying is harmless.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };

        let class_list = el.class_list();
        let result = if theme.is_dark() {
            el.set_attribute("data-theme", "dark")
                .and_then(|()| class_list.add_1("dark-mode"))
        } else {
            el.remove_attribute("data-theme")
                .and_then(|()| class_list.remove_1("dark-mode"))
        };
        if let Err(err) = result {
            log::warn!("failed to apply {} theme: {err:?}", theme.as_str());
        }
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(state: &mut ThemeState) -> Theme {
    let next = state.toggle(&mut LocalStorage);
    apply(next);
    log::debug!("theme switched to {}", next.as_str());
    next
}
