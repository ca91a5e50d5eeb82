//! Join form shown until the user enters a room.

use leptos::prelude::*;

use crate::net::socket_client::EventSender;
use crate::state::ViewSession;
use crate::state::session::{DEFAULT_ROOM, DEFAULT_USERNAME, Identity};

#[component]
pub fn JoinModal() -> impl IntoView {
    let view_session = expect_context::<ViewSession>();
    let sender = expect_context::<EventSender>();

    let username = RwSignal::new(String::new());
    let room = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let identity = match Identity::from_form(&username.get_untracked(), &room.get_untracked()) {
            Ok(identity) => identity,
            Err(err) => {
                log::warn!("join rejected: {err}");
                alert(&err.to_string());
                return;
            }
        };

        let Some(event) = view_session.session.try_update(|s| s.join(identity.clone())).flatten() else {
            log::debug!("join ignored: already joined");
            return;
        };
        sender.emit(&event);
        log::info!("joined room {} as {}", identity.room_id, identity.username);
        view_session.chat.update(|c| c.push_welcome(&identity));
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2 class="modal-title">"Join TrojanChat"</h2>
                <form class="join-form" on:submit=on_submit>
                    <input
                        id="usernameInput"
                        class="modal-input"
                        type="text"
                        placeholder=DEFAULT_USERNAME
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        id="roomInput"
                        class="modal-input"
                        type="text"
                        placeholder=DEFAULT_ROOM
                        prop:value=move || room.get()
                        on:input=move |ev| room.set(event_target_value(&ev))
                    />
                    <button class="modal-button" type="submit">"Join Chat"</button>
                </form>
            </div>
        </div>
    }
}

/// Blocking browser alert.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("alert failed: {err:?}");
            }
        }
    }
}
