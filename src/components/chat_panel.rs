//! Message list and composer.

use leptos::prelude::*;

use crate::net::socket_client::EventSender;
use crate::state::ViewSession;
use crate::state::chat::ChatEntry;

/// Chat history plus the message form. Only mounted after join.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let view_session = expect_context::<ViewSession>();
    let sender = expect_context::<EventSender>();
    let chat = view_session.chat;

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(event) = view_session.session.with_untracked(|s| s.compose_message(&input.get_untracked())) else {
            return;
        };
        sender.emit(&event);
        input.set(String::new());

        if let Some(el) = input_ref.get() {
            if let Err(err) = el.focus() {
                log::warn!("chat input focus failed: {err:?}");
            }
        }
    };

    view! {
        <div class="chat-container">
            <div id="messages" class="messages" node_ref=messages_ref>
                <For each=move || chat.get().entries key=ChatEntry::id children=render_entry />
            </div>
            <form class="message-form" on:submit=on_submit>
                <input
                    id="messageInput"
                    class="message-input"
                    type="text"
                    placeholder="Type a message..."
                    autocomplete="off"
                    node_ref=input_ref
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="send-button" type="submit">"Send"</button>
            </form>
        </div>
    }
}

fn render_entry(entry: ChatEntry) -> AnyView {
    match entry {
        ChatEntry::System { html, .. } => view! { <div class="system-message" inner_html=html></div> }.into_any(),
        ChatEntry::Message { username_html, text_html, time, own, .. } => {
            let class = if own { "message sent" } else { "message received" };
            view! {
                <div class=class>
                    <div class="message-username" inner_html=username_html></div>
                    <div class="message-text" inner_html=text_html></div>
                    <div class="message-time">{time}</div>
                </div>
            }
            .into_any()
        }
    }
}
