//! Client side of the Socket.IO session, independent of the transport.
//!
//! [`ProtocolSession::handle_text`] consumes one inbound WebSocket text frame
//! and says what to do next: write a reply, surface an event, or stop.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde_json::json;

use super::events::{EventError, InboundEvent, OutboundEvent};
use super::packet::{EnginePacket, Handshake, PacketError, SocketKind, SocketPacket};

/// Error returned by [`ProtocolSession::handle_text`]. None of these end the
/// connection; the caller logs and keeps reading.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error(transparent)]
    Packet(#[from] PacketError),
    #[error(transparent)]
    Event(#[from] EventError),
    /// Event packet whose data is not a `["name", ...]` array.
    #[error("event packet without a name")]
    UnnamedEvent,
}

/// Action requested by an inbound frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Write this text frame back to the server.
    Reply(String),
    /// The default namespace accepted the connection.
    Connected,
    Event(InboundEvent),
    /// The server ended the session.
    Closed,
}

#[derive(Debug, Default)]
pub struct ProtocolSession {
    handshake: Option<Handshake>,
    connected: bool,
}

impl ProtocolSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handshake(&self) -> Option<&Handshake> {
        self.handshake.as_ref()
    }

    /// `true` once the namespace connect has been acknowledged.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Handle one inbound text frame. `Ok(None)` means nothing to do.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError`] when the frame cannot be decoded or names an
    /// unknown event.
    pub fn handle_text(&mut self, raw: &str) -> Result<Option<Step>, ProtocolError> {
        match EnginePacket::decode(raw)? {
            EnginePacket::Open(handshake) => {
                log::info!("socket: engine open sid={}", handshake.sid);
                self.handshake = Some(handshake);
                Ok(Some(Step::Reply(connect_frame())))
            }
            EnginePacket::Ping(data) => Ok(Some(Step::Reply(EnginePacket::Pong(data).encode()))),
            EnginePacket::Close => Ok(Some(Step::Closed)),
            EnginePacket::Pong(_) | EnginePacket::Upgrade | EnginePacket::Noop => Ok(None),
            EnginePacket::Message(payload) => self.handle_socket(&payload),
        }
    }

    fn handle_socket(&mut self, payload: &str) -> Result<Option<Step>, ProtocolError> {
        let packet = SocketPacket::decode(payload)?;
        match packet.kind {
            SocketKind::Connect => {
                self.connected = true;
                Ok(Some(Step::Connected))
            }
            SocketKind::Disconnect => {
                self.connected = false;
                Ok(Some(Step::Closed))
            }
            SocketKind::ConnectError => {
                log::warn!("socket: connect refused: {:?}", packet.data);
                self.connected = false;
                Ok(Some(Step::Closed))
            }
            SocketKind::Event => {
                let (name, arg) = packet.event_parts().ok_or(ProtocolError::UnnamedEvent)?;
                Ok(Some(Step::Event(InboundEvent::from_parts(name, arg)?)))
            }
            SocketKind::Ack => Ok(None),
        }
    }
}

/// `40`: connect to the default namespace.
pub fn connect_frame() -> String {
    EnginePacket::Message(SocketPacket::new(SocketKind::Connect, None).encode()).encode()
}

/// `42["name",{...}]`.
pub fn encode_event(event: &OutboundEvent) -> String {
    let packet = SocketPacket::new(SocketKind::Event, Some(json!([event.name(), event.payload()])));
    EnginePacket::Message(packet.encode()).encode()
}
