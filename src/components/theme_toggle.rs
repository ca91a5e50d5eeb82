use leptos::prelude::*;

use crate::state::ViewSession;
use crate::util;

/// Light/dark switch. The glyph shows the theme a click would leave.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ViewSession>().theme;

    let on_click = move |_| {
        theme.update(|t| {
            util::theme::toggle(t);
        });
    };

    view! {
        <button id="themeBtn" class="theme-toggle" title="Toggle theme" on:click=on_click>
            {move || theme.with(|t| t.theme.icon())}
        </button>
    }
}
