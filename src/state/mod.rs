//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `chat`, `dashboard`, `theme`) into
//! plain structs with unit tests. [`ViewSession`] wraps each in an
//! `RwSignal`, is created once by the root component, and is handed to
//! components and the socket task through context.

pub mod chat;
pub mod dashboard;
pub mod session;
pub mod theme;


use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::events::{InboundEvent, OutboundEvent};
use chat::ChatState;
use dashboard::DashboardState;
use session::SessionState;
use theme::ThemeState;

/// Reactive handles to every piece of view state.
#[derive(Clone, Copy)]
pub struct ViewSession {
    pub session: RwSignal<SessionState>,
    pub chat: RwSignal<ChatState>,
    pub dashboard: RwSignal<DashboardState>,
    pub theme: RwSignal<ThemeState>,
}

impl ViewSession {
    pub fn new(config: &ClientConfig, theme: ThemeState) -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            chat: RwSignal::new(ChatState::default()),
            dashboard: RwSignal::new(DashboardState::new(config.history_capacity)),
            theme: RwSignal::new(theme),
        }
    }

    /// Route an inbound event to the state it affects. Returns an event the
    /// socket must send in response (a rejoin after reconnect).
    pub fn dispatch(self, event: InboundEvent) -> Option<OutboundEvent> {
        match event {
            InboundEvent::ConnectionResponse { user_id } => {
                return self.session.try_update(|s| s.accept_connection(user_id)).flatten();
            }
            InboundEvent::UserJoined { username, user_count } => {
                self.session.update(|s| s.record_online_count(user_count));
                self.chat.update(|c| c.push_user_joined(&username, user_count));
            }
            InboundEvent::NewMessage(message) => {
                let own = self.session.with_untracked(|s| s.is_own(message.user_id.as_deref()));
                self.chat.update(|c| c.push_message(&message, own));
            }
            InboundEvent::DashboardUpdate(snapshot) => {
                self.dashboard.update(|d| d.apply_snapshot(&snapshot));
            }
            InboundEvent::Disconnect => {
                log::info!("socket: disconnected");
                self.session.update(SessionState::mark_disconnected);
            }
        }
        None
    }
}
