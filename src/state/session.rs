#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::events::OutboundEvent;
use crate::util::format::online_label;

pub const DEFAULT_USERNAME: &str = "Anonymous";
pub const DEFAULT_ROOM: &str = "default";

/// Socket connection status shown by the indicator dot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connecting => "Connecting...",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }

    /// Indicator color; `None` leaves the stylesheet's neutral color.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::Connecting => None,
            Self::Connected => Some("#00dd88"),
            Self::Disconnected => Some("#ff3366"),
        }
    }
}

/// Error returned by [`Identity::from_form`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    #[error("Please enter a username")]
    EmptyUsername,
}

/// Who the local user is and which room they joined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub room_id: String,
}

impl Identity {
    /// Build an identity from raw form fields. Both are trimmed; blanks fall
    /// back to `Anonymous` / `default`.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::EmptyUsername`] if the effective username is
    /// empty, which defaulting makes unreachable.
    pub fn from_form(username: &str, room_id: &str) -> Result<Self, JoinError> {
        let username = or_default(username, DEFAULT_USERNAME);
        let room_id = or_default(room_id, DEFAULT_ROOM);
        if username.is_empty() {
            return Err(JoinError::EmptyUsername);
        }
        Ok(Self { username, room_id })
    }
}

fn or_default(field: &str, fallback: &str) -> String {
    let trimmed = field.trim();
    if trimmed.is_empty() { fallback.to_owned() } else { trimmed.to_owned() }
}

/// Connection and identity state for the chat view.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub status: ConnectionStatus,
    /// Server-assigned id from `connection_response`.
    pub user_id: Option<String>,
    pub identity: Option<Identity>,
    pub online_count: Option<u64>,
    /// Set when a joined session loses its connection; the next
    /// `connection_response` re-sends `join`.
    rejoin_pending: bool,
}

impl SessionState {
    /// Store the server-assigned id. After a reconnect of a joined session,
    /// returns the `join` that restores room membership under the new id.
    pub fn accept_connection(&mut self, user_id: String) -> Option<OutboundEvent> {
        log::info!("session: assigned user id {user_id}");
        self.user_id = Some(user_id);
        self.status = ConnectionStatus::Connected;

        if !std::mem::take(&mut self.rejoin_pending) {
            return None;
        }
        let identity = self.identity.as_ref()?;
        log::info!("session: rejoining room {}", identity.room_id);
        Some(self.join_event(identity))
    }

    pub fn mark_connecting(&mut self) {
        self.status = ConnectionStatus::Connecting;
    }

    pub fn mark_disconnected(&mut self) {
        self.status = ConnectionStatus::Disconnected;
        self.rejoin_pending = self.identity.is_some();
    }

    pub fn record_online_count(&mut self, count: u64) {
        self.online_count = Some(count);
    }

    /// Online label for the header; empty until the server reports a count.
    pub fn online_text(&self) -> String {
        self.online_count.map_or_else(String::new, online_label)
    }

    pub fn is_joined(&self) -> bool {
        self.identity.is_some()
    }

    /// Store the identity and build the `join` event. The identity is set
    /// once per page; a second join returns `None`.
    pub fn join(&mut self, identity: Identity) -> Option<OutboundEvent> {
        if self.identity.is_some() {
            return None;
        }
        let event = self.join_event(&identity);
        self.identity = Some(identity);
        Some(event)
    }

    fn join_event(&self, identity: &Identity) -> OutboundEvent {
        OutboundEvent::Join {
            user_id: self.user_id.clone(),
            username: identity.username.clone(),
            room_id: identity.room_id.clone(),
        }
    }

    /// Build `send_message` for the trimmed text. Blank text, or no identity
    /// yet, yields `None`.
    pub fn compose_message(&self, text: &str) -> Option<OutboundEvent> {
        let message = text.trim();
        let identity = self.identity.as_ref()?;
        if message.is_empty() {
            return None;
        }
        Some(OutboundEvent::SendMessage {
            user_id: self.user_id.clone(),
            username: identity.username.clone(),
            room_id: identity.room_id.clone(),
            message: message.to_owned(),
        })
    }

    /// A message is ours only when both ids are known and equal.
    pub fn is_own(&self, sender_id: Option<&str>) -> bool {
        matches!((self.user_id.as_deref(), sender_id), (Some(mine), Some(theirs)) if mine == theirs)
    }
}
