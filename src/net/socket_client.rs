//! WebSocket lifecycle for the chat server connection.
//!
//! The browser task connects, runs the Socket.IO handshake through
//! [`ProtocolSession`], dispatches inbound events into [`ViewSession`], and
//! reconnects with exponential backoff. Outbound events go through an
//! [`EventSender`] that queues frames on an unbounded channel; queued frames
//! are only written once the namespace connect is acknowledged.

#[cfg(test)]
#[path = "socket_client_test.rs"]
mod socket_client_test;

use futures::channel::mpsc::UnboundedSender;

use super::events::OutboundEvent;
use super::protocol::encode_event;

/// Handle for emitting events to the server.
#[derive(Clone, Debug, Default)]
pub struct EventSender {
    tx: Option<UnboundedSender<String>>,
}

impl EventSender {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A sender with no connection behind it; every emit is dropped.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Queue `event` for the socket writer. Returns `false` if it was dropped.
    pub fn emit(&self, event: &OutboundEvent) -> bool {
        let Some(tx) = &self.tx else {
            log::warn!("socket: no connection, dropping {}", event.name());
            return false;
        };
        if tx.unbounded_send(encode_event(event)).is_err() {
            log::warn!("socket: writer closed, dropping {}", event.name());
            return false;
        }
        true
    }
}

/// Error that ends one connection attempt.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("websocket open failed: {0}")]
    Open(String),
    #[error("websocket receive failed: {0}")]
    Receive(String),
}

#[cfg(feature = "csr")]
pub use browser::spawn_socket_client;

#[cfg(feature = "csr")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use futures::channel::mpsc::{self, UnboundedReceiver};
    use futures::channel::oneshot;
    use futures::{SinkExt, StreamExt, future, stream};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    use super::{EventSender, TransportError};
    use crate::config::{ClientConfig, ReconnectPolicy};
    use crate::net::events::{EventError, InboundEvent};
    use crate::net::protocol::{ProtocolError, ProtocolSession, Step, encode_event};
    use crate::state::ViewSession;
    use crate::state::session::SessionState;

    /// Spawn the connection loop as a local task and return its sender.
    pub fn spawn_socket_client(config: &ClientConfig, view: ViewSession) -> EventSender {
        let (tx, rx) = mpsc::unbounded::<String>();
        let url = page_socket_url(config);
        log::info!("socket: endpoint {url}");
        leptos::task::spawn_local(socket_loop(url, config.reconnect, view, rx));
        EventSender::new(tx)
    }

    fn page_socket_url(config: &ClientConfig) -> String {
        let location = web_sys::window().map(|w| w.location());
        let read = |field: Result<String, wasm_bindgen::JsValue>, fallback: &str| match field {
            Ok(value) => value,
            Err(err) => {
                log::warn!("socket: page location unreadable ({err:?}), using {fallback}");
                fallback.to_owned()
            }
        };
        let (protocol, host) = match location {
            Some(loc) => (read(loc.protocol(), "http:"), read(loc.host(), "localhost:5000")),
            None => ("http:".to_owned(), "localhost:5000".to_owned()),
        };
        config.socket_url(&protocol, &host)
    }

    async fn socket_loop(
        url: String,
        policy: ReconnectPolicy,
        view: ViewSession,
        rx: UnboundedReceiver<String>,
    ) {
        let rx = Rc::new(RefCell::new(rx));
        let mut backoff_ms = policy.initial_ms;

        loop {
            view.session.update(SessionState::mark_connecting);

            let handshaken = Cell::new(false);
            match connect_and_run(&url, view, &rx, &handshaken).await {
                Ok(()) => log::info!("socket: closed by server"),
                Err(err) => log::warn!("socket: {err}"),
            }
            view.dispatch(InboundEvent::Disconnect);

            if handshaken.get() {
                backoff_ms = policy.initial_ms;
            }
            log::warn!("socket: reconnecting in {backoff_ms} ms");
            gloo_timers::future::sleep(Duration::from_millis(u64::from(backoff_ms))).await;
            backoff_ms = policy.next_delay(backoff_ms);
        }
    }

    /// Run one connection until either side ends it.
    async fn connect_and_run(
        url: &str,
        view: ViewSession,
        rx: &Rc<RefCell<UnboundedReceiver<String>>>,
        handshaken: &Cell<bool>,
    ) -> Result<(), TransportError> {
        let ws = WebSocket::open(url).map_err(|err| TransportError::Open(err.to_string()))?;
        let (mut ws_write, mut ws_read) = ws.split();

        // Protocol replies (connect, pong) flow at once; user frames wait for
        // the namespace connect.
        let (reply_tx, reply_rx) = mpsc::unbounded::<String>();
        let (connected_tx, connected_rx) = oneshot::channel::<()>();

        let mut rx_borrow = rx.borrow_mut();
        let mut user_frames = Some(&mut *rx_borrow);
        let gated = stream::once(connected_rx)
            .filter_map(move |signal| future::ready(if signal.is_err() { None } else { user_frames.take() }))
            .flatten();
        let mut outbound = Box::pin(stream::select(reply_rx, gated));

        let send_task = async {
            while let Some(frame) = outbound.next().await {
                if ws_write.send(Message::Text(frame)).await.is_err() {
                    break;
                }
            }
        };

        let recv_task = async {
            let mut protocol = ProtocolSession::new();
            let mut connected_tx = Some(connected_tx);
            while let Some(msg) = ws_read.next().await {
                let text = match msg {
                    Ok(Message::Text(text)) => text,
                    Ok(Message::Bytes(_)) => {
                        log::debug!("socket: ignoring binary frame");
                        continue;
                    }
                    Err(err) => return Err(TransportError::Receive(err.to_string())),
                };
                match protocol.handle_text(&text) {
                    Ok(None) => {}
                    Ok(Some(Step::Reply(frame))) => {
                        if reply_tx.unbounded_send(frame).is_err() {
                            break;
                        }
                    }
                    Ok(Some(Step::Connected)) => {
                        log::info!("socket: connected");
                        handshaken.set(true);
                        if let Some(signal) = connected_tx.take() {
                            if signal.send(()).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(Some(Step::Event(event))) => {
                        if let Some(follow_up) = view.dispatch(event) {
                            if reply_tx.unbounded_send(encode_event(&follow_up)).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(Some(Step::Closed)) => break,
                    Err(ProtocolError::Event(EventError::Unknown(name))) => {
                        log::debug!("socket: ignoring unknown event {name}");
                    }
                    Err(err) => log::warn!("socket: skipping packet: {err}"),
                }
            }
            Ok(())
        };

        match future::select(Box::pin(send_task), Box::pin(recv_task)).await {
            future::Either::Left(((), _)) => Ok(()),
            future::Either::Right((result, _)) => result,
        }
    }
}
