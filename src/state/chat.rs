#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::Deserialize;

use super::session::Identity;
use crate::util::escape::{escape_html, text_to_html};
use crate::util::format::clock_time;

/// A `new_message` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    pub user_id: Option<String>,
    pub username: String,
    pub text: String,
    pub timestamp: String,
}

/// One rendered row of the message list. Markup fields are already escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEntry {
    System {
        id: u64,
        html: String,
    },
    Message {
        id: u64,
        username_html: String,
        text_html: String,
        time: String,
        own: bool,
    },
}

impl ChatEntry {
    pub fn id(&self) -> u64 {
        match self {
            Self::System { id, .. } | Self::Message { id, .. } => *id,
        }
    }
}

/// State for the chat message list.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    next_id: u64,
}

impl ChatState {
    pub fn push_system(&mut self, text: &str) {
        let id = self.next_id();
        self.entries.push(ChatEntry::System { id, html: escape_html(text) });
    }

    /// Local notice appended right after a successful join.
    pub fn push_welcome(&mut self, identity: &Identity) {
        self.push_system(&format!(
            "Welcome {}! You're now in room: {}",
            identity.username, identity.room_id
        ));
    }

    pub fn push_user_joined(&mut self, username: &str, user_count: u64) {
        self.push_system(&format!("{username} joined the chat ({user_count} online)"));
    }

    pub fn push_message(&mut self, message: &ChatMessage, own: bool) {
        let id = self.next_id();
        self.entries.push(ChatEntry::Message {
            id,
            username_html: escape_html(&message.username),
            text_html: text_to_html(&message.text),
            time: clock_time(&message.timestamp),
            own,
        });
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
