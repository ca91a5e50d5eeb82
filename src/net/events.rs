//! Typed application events exchanged with the chat server.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::dashboard::snapshot::DashboardSnapshot;
use crate::state::chat::ChatMessage;

pub const CONNECTION_RESPONSE: &str = "connection_response";
pub const USER_JOINED: &str = "user_joined";
pub const NEW_MESSAGE: &str = "new_message";
pub const DASHBOARD_UPDATE: &str = "dashboard_update";
pub const DISCONNECT: &str = "disconnect";
pub const JOIN: &str = "join";
pub const SEND_MESSAGE: &str = "send_message";

/// Error returned by [`InboundEvent::from_parts`].
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// The server emitted an event this client does not handle.
    #[error("unknown event {0:?}")]
    Unknown(String),
    /// The payload does not match the event's schema.
    #[error("invalid {event} payload: {source}")]
    Payload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Event received from the server, or synthesized on transport loss.
#[derive(Clone, Debug, PartialEq)]
pub enum InboundEvent {
    ConnectionResponse { user_id: String },
    UserJoined { username: String, user_count: u64 },
    NewMessage(ChatMessage),
    DashboardUpdate(Box<DashboardSnapshot>),
    Disconnect,
}

#[derive(Deserialize)]
struct ConnectionResponsePayload {
    user_id: String,
}

#[derive(Deserialize)]
struct UserJoinedPayload {
    username: String,
    user_count: u64,
}

impl InboundEvent {
    /// Decode an event from its name and first argument.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Unknown`] for an unhandled name and
    /// [`EventError::Payload`] when the argument has the wrong shape.
    pub fn from_parts(name: &str, payload: Value) -> Result<Self, EventError> {
        match name {
            CONNECTION_RESPONSE => {
                let p: ConnectionResponsePayload = decode(CONNECTION_RESPONSE, payload)?;
                Ok(Self::ConnectionResponse { user_id: p.user_id })
            }
            USER_JOINED => {
                let p: UserJoinedPayload = decode(USER_JOINED, payload)?;
                Ok(Self::UserJoined { username: p.username, user_count: p.user_count })
            }
            NEW_MESSAGE => decode(NEW_MESSAGE, payload).map(Self::NewMessage),
            DASHBOARD_UPDATE => DashboardSnapshot::from_value(payload)
                .map(|s| Self::DashboardUpdate(Box::new(s)))
                .map_err(|source| EventError::Payload { event: DASHBOARD_UPDATE, source }),
            DISCONNECT => Ok(Self::Disconnect),
            other => Err(EventError::Unknown(other.to_owned())),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(event: &'static str, payload: Value) -> Result<T, EventError> {
    serde_json::from_value(payload).map_err(|source| EventError::Payload { event, source })
}

/// Event emitted by this client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutboundEvent {
    /// `user_id` is `None` when the server has not assigned one yet; it is
    /// sent as `null`.
    Join { user_id: Option<String>, username: String, room_id: String },
    SendMessage { user_id: Option<String>, username: String, room_id: String, message: String },
}

impl OutboundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Join { .. } => JOIN,
            Self::SendMessage { .. } => SEND_MESSAGE,
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            Self::Join { user_id, username, room_id } => json!({
                "user_id": user_id,
                "username": username,
                "room_id": room_id,
            }),
            Self::SendMessage { user_id, username, room_id, message } => json!({
                "user_id": user_id,
                "username": username,
                "room_id": room_id,
                "message": message,
            }),
        }
    }
}
