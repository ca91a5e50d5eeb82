use serde_json::json;

use super::*;

#[test]
fn decodes_connection_response() {
    let event = InboundEvent::from_parts("connection_response", json!({"user_id": "u-1"})).expect("event");
    assert_eq!(event, InboundEvent::ConnectionResponse { user_id: "u-1".into() });
}

#[test]
fn decodes_user_joined() {
    let event =
        InboundEvent::from_parts("user_joined", json!({"username": "ada", "user_count": 3})).expect("event");
    assert_eq!(event, InboundEvent::UserJoined { username: "ada".into(), user_count: 3 });
}

#[test]
fn decodes_new_message() {
    let event = InboundEvent::from_parts(
        "new_message",
        json!({"user_id": "u-2", "username": "bob", "text": "hi", "timestamp": "2024-01-01T10:00:00"}),
    )
    .expect("event");
    let InboundEvent::NewMessage(message) = event else { panic!("expected message") };
    assert_eq!(message.user_id.as_deref(), Some("u-2"));
    assert_eq!(message.text, "hi");
}

#[test]
fn decodes_dashboard_update_as_snapshot() {
    let event = InboundEvent::from_parts("dashboard_update", json!({"risk_score": 70})).expect("event");
    let InboundEvent::DashboardUpdate(snapshot) = event else { panic!("expected dashboard") };
    assert_eq!(snapshot.risk_score, Some(70.0));
}

#[test]
fn disconnect_needs_no_payload() {
    let event = InboundEvent::from_parts("disconnect", serde_json::Value::Null).expect("event");
    assert_eq!(event, InboundEvent::Disconnect);
}

#[test]
fn unknown_event_is_reported_by_name() {
    let err = InboundEvent::from_parts("typing", json!({})).expect_err("unknown");
    assert!(matches!(err, EventError::Unknown(ref name) if name == "typing"));
}

#[test]
fn wrong_payload_shape_is_a_payload_error() {
    let err = InboundEvent::from_parts("user_joined", json!({"username": 5})).expect_err("bad payload");
    assert!(matches!(err, EventError::Payload { event: "user_joined", .. }));
    assert!(err.to_string().starts_with("invalid user_joined payload"));
}

#[test]
fn positional_dashboard_update_is_rejected() {
    let err = InboundEvent::from_parts("dashboard_update", json!([null, null, 90, {"a": ["x"]}, null, null, 99]))
        .expect_err("array payload");
    assert!(matches!(err, EventError::Payload { event: "dashboard_update", .. }));
}

#[test]
fn join_payload_sends_null_before_an_id_is_assigned() {
    let event = OutboundEvent::Join { user_id: None, username: "ada".into(), room_id: "default".into() };
    assert_eq!(event.name(), "join");
    assert_eq!(event.payload(), json!({"user_id": null, "username": "ada", "room_id": "default"}));
}

#[test]
fn send_message_payload_carries_identity() {
    let event = OutboundEvent::SendMessage {
        user_id: Some("u-1".into()),
        username: "ada".into(),
        room_id: "lab".into(),
        message: "hello".into(),
    };
    assert_eq!(event.name(), "send_message");
    assert_eq!(
        event.payload(),
        json!({"user_id": "u-1", "username": "ada", "room_id": "lab", "message": "hello"})
    );
}
