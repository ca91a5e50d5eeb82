//! Connectivity dot and online count.

use leptos::prelude::*;

use crate::state::ViewSession;
use crate::state::session::SessionState;

#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<ViewSession>().session;

    let dot_style = move || match session.with(|s| s.status.color()) {
        Some(color) => format!("background: {color}"),
        None => String::new(),
    };
    let status_label = move || session.with(|s| s.status.label());
    let online = move || session.with(SessionState::online_text);

    view! {
        <div class="status-bar">
            <span class="connection-status">
                <span id="statusDot" class="status-dot" style=dot_style></span>
                <span class="status-label">{status_label}</span>
            </span>
            <span id="onlineCount" class="online-count">{online}</span>
        </div>
    }
}
