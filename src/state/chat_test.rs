use super::*;

fn message(text: &str) -> ChatMessage {
    ChatMessage {
        user_id: Some("u-2".into()),
        username: "bob".into(),
        text: text.into(),
        timestamp: "2024-03-05T14:05:09".into(),
    }
}

#[test]
fn welcome_notice_names_user_and_room() {
    let mut chat = ChatState::default();
    chat.push_welcome(&Identity { username: "ada".into(), room_id: "lab".into() });
    assert_eq!(
        chat.entries,
        vec![ChatEntry::System { id: 0, html: "Welcome ada! You&#039;re now in room: lab".into() }]
    );
}

#[test]
fn join_notice_includes_online_count() {
    let mut chat = ChatState::default();
    chat.push_user_joined("bob", 3);
    let ChatEntry::System { html, .. } = &chat.entries[0] else { panic!("expected system") };
    assert_eq!(html, "bob joined the chat (3 online)");
}

#[test]
fn system_notice_usernames_are_escaped() {
    let mut chat = ChatState::default();
    chat.push_user_joined("<img src=x onerror=alert(1)>", 2);
    let ChatEntry::System { html, .. } = &chat.entries[0] else { panic!("expected system") };
    assert!(html.starts_with("&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn message_bubble_escapes_text_and_username() {
    let mut chat = ChatState::default();
    let mut msg = message("<b>hi</b>\nthere");
    msg.username = "<i>bob</i>".into();
    chat.push_message(&msg, false);
    let ChatEntry::Message { username_html, text_html, time, own, .. } = &chat.entries[0] else {
        panic!("expected message");
    };
    assert_eq!(username_html, "&lt;i&gt;bob&lt;/i&gt;");
    assert_eq!(text_html, "&lt;b&gt;hi&lt;/b&gt;<br>there");
    assert_eq!(time, "02:05:09 PM");
    assert!(!own);
}

#[test]
fn entries_get_increasing_ids() {
    let mut chat = ChatState::default();
    chat.push_system("one");
    chat.push_message(&message("two"), true);
    chat.push_system("three");
    let ids: Vec<u64> = chat.entries.iter().map(ChatEntry::id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn message_payload_tolerates_null_user_id() {
    let msg: ChatMessage =
        serde_json::from_value(serde_json::json!({"user_id": null, "username": "x", "text": "y"}))
            .expect("decode");
    assert_eq!(msg.user_id, None);
    assert_eq!(msg.timestamp, "");
}
