//! Single-page chat view: join modal, then header, messages, and dashboard.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::dashboard_panel::DashboardPanel;
use crate::components::join_modal::JoinModal;
use crate::components::status_bar::StatusBar;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ViewSession;

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<ViewSession>().session;
    let joined = move || session.with(|s| s.is_joined());

    view! {
        <div class="app">
            <header class="chat-header">
                <h1 class="chat-title">"TrojanChat"</h1>
                <StatusBar />
                <ThemeToggle />
            </header>
            <Show when=joined fallback=|| view! { <JoinModal /> }>
                <ChatPanel />
            </Show>
            <DashboardPanel />
        </div>
    }
}
