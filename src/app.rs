//! Root component: shared state, socket task, and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::socket_client::EventSender;
use crate::pages::chat::ChatPage;
use crate::state::ViewSession;
use crate::util;

/// Root application component.
///
/// Builds the [`ViewSession`], starts the socket task, and provides both
/// to descendants through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let theme = util::theme::init(&config.theme_key);
    let view_session = ViewSession::new(&config, theme);
    let sender = connect(&config, view_session);

    provide_context(view_session);
    provide_context(sender);

    #[cfg(feature = "csr")]
    install_dashboard_chord(view_session);

    view! {
        <Title text="TrojanChat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "csr")]
fn connect(config: &ClientConfig, view_session: ViewSession) -> EventSender {
    crate::net::socket_client::spawn_socket_client(config, view_session)
}

#[cfg(not(feature = "csr"))]
fn connect(_config: &ClientConfig, _view_session: ViewSession) -> EventSender {
    EventSender::detached()
}

/// Ctrl+Shift+X toggles the dashboard from anywhere on the page.
#[cfg(feature = "csr")]
fn install_dashboard_chord(view_session: ViewSession) {
    use crate::util::keyboard::is_dashboard_chord;

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if !is_dashboard_chord(ev.ctrl_key(), ev.shift_key(), &ev.code()) {
            return;
        }
        ev.prevent_default();
        view_session.dashboard.update(|d| {
            let active = d.toggle();
            log::debug!("dashboard {}", if active { "opened" } else { "closed" });
        });
    });
    on_cleanup(move || handle.remove());
}
