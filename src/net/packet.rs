//! Engine.IO v4 / Socket.IO v5 text packet codec.
//!
//! Only the text framing is supported: the client runs over a single
//! WebSocket with no long-polling fallback and no binary attachments.

#[cfg(test)]
#[path = "packet_test.rs"]
mod packet_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned when an inbound packet cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum PacketError {
    /// Zero-length packet.
    #[error("empty packet")]
    Empty,
    /// Leading Engine.IO type digit is not one of `0..=6`.
    #[error("unknown engine packet type {0:?}")]
    UnknownEngineType(char),
    /// Socket.IO type digit is not one of `0..=6`.
    #[error("unknown socket packet type {0:?}")]
    UnknownSocketType(char),
    /// Binary event/ack packets need attachment frames, which are not supported.
    #[error("binary socket packets are not supported")]
    BinaryUnsupported,
    /// Ack id overflowed `u64`.
    #[error("invalid ack id")]
    InvalidAckId,
    /// The open packet's handshake object did not parse.
    #[error("invalid handshake: {0}")]
    Handshake(#[source] serde_json::Error),
    /// The socket packet's data is not valid JSON.
    #[error("invalid packet data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Session parameters announced by the server in the open packet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    #[serde(default)]
    pub ping_interval: u64,
    #[serde(default)]
    pub ping_timeout: u64,
    #[serde(default)]
    pub max_payload: u64,
}

/// Transport-level packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnginePacket {
    Open(Handshake),
    Close,
    Ping(String),
    Pong(String),
    /// Carries an encoded [`SocketPacket`].
    Message(String),
    Upgrade,
    Noop,
}

impl EnginePacket {
    /// Decode one text frame.
    ///
    /// # Errors
    ///
    /// Returns [`PacketError`] for an empty frame, an unknown type digit, or a
    /// malformed handshake.
    pub fn decode(raw: &str) -> Result<Self, PacketError> {
        let mut chars = raw.chars();
        let kind = chars.next().ok_or(PacketError::Empty)?;
        let body = chars.as_str();
        match kind {
            '0' => serde_json::from_str(body).map(Self::Open).map_err(PacketError::Handshake),
            '1' => Ok(Self::Close),
            '2' => Ok(Self::Ping(body.to_owned())),
            '3' => Ok(Self::Pong(body.to_owned())),
            '4' => Ok(Self::Message(body.to_owned())),
            '5' => Ok(Self::Upgrade),
            '6' => Ok(Self::Noop),
            other => Err(PacketError::UnknownEngineType(other)),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            Self::Open(handshake) => {
                format!("0{}", serde_json::to_string(handshake).unwrap_or_default())
            }
            Self::Close => "1".to_owned(),
            Self::Ping(data) => format!("2{data}"),
            Self::Pong(data) => format!("3{data}"),
            Self::Message(data) => format!("4{data}"),
            Self::Upgrade => "5".to_owned(),
            Self::Noop => "6".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocketKind {
    Connect,
    Disconnect,
    Event,
    Ack,
    ConnectError,
}

impl SocketKind {
    fn from_char(c: char) -> Result<Self, PacketError> {
        match c {
            '0' => Ok(Self::Connect),
            '1' => Ok(Self::Disconnect),
            '2' => Ok(Self::Event),
            '3' => Ok(Self::Ack),
            '4' => Ok(Self::ConnectError),
            '5' | '6' => Err(PacketError::BinaryUnsupported),
            other => Err(PacketError::UnknownSocketType(other)),
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Connect => '0',
            Self::Disconnect => '1',
            Self::Event => '2',
            Self::Ack => '3',
            Self::ConnectError => '4',
        }
    }
}

pub const DEFAULT_NAMESPACE: &str = "/";

/// Application-level packet carried inside an engine message.
#[derive(Clone, Debug, PartialEq)]
pub struct SocketPacket {
    pub kind: SocketKind,
    pub namespace: String,
    pub ack_id: Option<u64>,
    pub data: Option<Value>,
}

impl SocketPacket {
    pub fn new(kind: SocketKind, data: Option<Value>) -> Self {
        Self { kind, namespace: DEFAULT_NAMESPACE.to_owned(), ack_id: None, data }
    }

    /// Decode the payload of an engine message: type digit, optional
    /// `/namespace,`, optional ack id, optional JSON data.
    ///
    /// # Errors
    ///
    /// Returns [`PacketError`] for an unknown or binary type, an oversized
    /// ack id, or malformed JSON data.
    pub fn decode(raw: &str) -> Result<Self, PacketError> {
        let mut chars = raw.chars();
        let kind = SocketKind::from_char(chars.next().ok_or(PacketError::Empty)?)?;
        let mut rest = chars.as_str();

        let mut namespace = DEFAULT_NAMESPACE;
        if rest.starts_with('/') {
            match rest.split_once(',') {
                Some((ns, tail)) => {
                    namespace = ns;
                    rest = tail;
                }
                None => {
                    namespace = rest;
                    rest = "";
                }
            }
        }

        let digits = rest.chars().take_while(char::is_ascii_digit).count();
        let ack_id = if digits == 0 {
            None
        } else {
            Some(rest[..digits].parse::<u64>().map_err(|_| PacketError::InvalidAckId)?)
        };
        rest = &rest[digits..];

        let data = if rest.is_empty() { None } else { Some(serde_json::from_str(rest)?) };
        Ok(Self { kind, namespace: namespace.to_owned(), ack_id, data })
    }

    pub fn encode(&self) -> String {
        let mut out = String::new();
        out.push(self.kind.as_char());
        if self.namespace != DEFAULT_NAMESPACE {
            out.push_str(&self.namespace);
            out.push(',');
        }
        if let Some(id) = self.ack_id {
            out.push_str(&id.to_string());
        }
        if let Some(data) = &self.data {
            out.push_str(&data.to_string());
        }
        out
    }

    /// Split an event payload `["name", arg]` into its name and first
    /// argument (`null` when the event carries none).
    pub fn event_parts(&self) -> Option<(&str, Value)> {
        let Value::Array(items) = self.data.as_ref()? else {
            return None;
        };
        let name = items.first()?.as_str()?;
        Some((name, items.get(1).cloned().unwrap_or(Value::Null)))
    }
}
