//! # trojan-chat
//!
//! Leptos + WASM client for TrojanChat: a room-based chat over Socket.IO
//! with a hidden analytics dashboard (Ctrl+Shift+X) fed by server-side
//! conversation snapshots.
//!
//! Pure logic (wire codec, snapshot projection, view state) compiles and
//! tests on the host. Browser glue sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod dashboard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
