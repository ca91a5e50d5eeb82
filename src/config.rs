//! Client configuration.
//!
//! Everything here has a compile-time default; the page location supplies the
//! only runtime input (scheme and host for the socket endpoint).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SOCKET_PATH: &str = "/socket.io/";
pub const ENGINE_IO_VERSION: u8 = 4;
pub const DEFAULT_THEME_KEY: &str = "trojan-theme";
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;
pub const DEFAULT_RECONNECT_INITIAL_MS: u32 = 1_000;
pub const DEFAULT_RECONNECT_MAX_MS: u32 = 10_000;

/// Exponential reconnect backoff bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub initial_ms: u32,
    pub max_ms: u32,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self { initial_ms: DEFAULT_RECONNECT_INITIAL_MS, max_ms: DEFAULT_RECONNECT_MAX_MS }
    }
}

impl ReconnectPolicy {
    /// Delay to use after waiting `current_ms`.
    pub fn next_delay(self, current_ms: u32) -> u32 {
        current_ms.saturating_mul(2).min(self.max_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Socket.IO mount path on the page's origin.
    pub socket_path: String,
    /// `localStorage` key holding the theme preference.
    pub theme_key: String,
    /// Points kept per dashboard timeline.
    pub history_capacity: usize,
    pub reconnect: ReconnectPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            socket_path: DEFAULT_SOCKET_PATH.to_owned(),
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            reconnect: ReconnectPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// WebSocket endpoint on the page's own origin.
    ///
    /// `page_protocol` is `location.protocol` (`"https:"` selects `wss`).
    pub fn socket_url(&self, page_protocol: &str, host: &str) -> String {
        let scheme = if page_protocol.starts_with("https") { "wss" } else { "ws" };
        let path = self.socket_path.trim_end_matches('/');
        let path = if path.starts_with('/') { path.to_owned() } else { format!("/{path}") };
        format!("{scheme}://{host}{path}/?EIO={ENGINE_IO_VERSION}&transport=websocket")
    }
}
