use super::*;

fn joined(user_id: Option<&str>) -> SessionState {
    let mut state = SessionState { user_id: user_id.map(str::to_owned), ..SessionState::default() };
    let identity = Identity::from_form("ada", "lab").expect("identity");
    state.join(identity).expect("join");
    state
}

// =============================================================
// Identity
// =============================================================

#[test]
fn blank_fields_fall_back_to_defaults() {
    let identity = Identity::from_form("   ", "").expect("identity");
    assert_eq!(identity.username, "Anonymous");
    assert_eq!(identity.room_id, "default");
}

#[test]
fn fields_are_trimmed() {
    let identity = Identity::from_form("  ada ", "\tlab\n").expect("identity");
    assert_eq!(identity, Identity { username: "ada".into(), room_id: "lab".into() });
}

#[test]
fn join_error_message_matches_alert_text() {
    assert_eq!(JoinError::EmptyUsername.to_string(), "Please enter a username");
}

// =============================================================
// Join
// =============================================================

#[test]
fn join_before_connection_response_sends_null_user_id() {
    let mut state = SessionState::default();
    let event = state.join(Identity::from_form("", "").expect("identity")).expect("join");
    assert_eq!(
        event,
        OutboundEvent::Join { user_id: None, username: "Anonymous".into(), room_id: "default".into() }
    );
    assert!(state.is_joined());
}

#[test]
fn join_after_connection_response_carries_user_id() {
    let mut state = SessionState::default();
    state.accept_connection("u-1".into());
    let event = state.join(Identity::from_form("ada", "lab").expect("identity")).expect("join");
    assert_eq!(
        event,
        OutboundEvent::Join { user_id: Some("u-1".into()), username: "ada".into(), room_id: "lab".into() }
    );
}

#[test]
fn identity_is_assigned_once() {
    let mut state = joined(None);
    assert_eq!(state.join(Identity::from_form("eve", "other").expect("identity")), None);
    assert_eq!(state.identity.as_ref().map(|i| i.username.as_str()), Some("ada"));
}

// =============================================================
// Send
// =============================================================

#[test]
fn send_requires_identity() {
    let state = SessionState::default();
    assert_eq!(state.compose_message("hello"), None);
}

#[test]
fn blank_message_is_a_no_op() {
    let state = joined(Some("u-1"));
    assert_eq!(state.compose_message(""), None);
    assert_eq!(state.compose_message("   \n\t"), None);
}

#[test]
fn message_is_trimmed_and_addressed() {
    let state = joined(Some("u-1"));
    assert_eq!(
        state.compose_message("  hi there  "),
        Some(OutboundEvent::SendMessage {
            user_id: Some("u-1".into()),
            username: "ada".into(),
            room_id: "lab".into(),
            message: "hi there".into(),
        })
    );
}

// =============================================================
// Connection + ownership
// =============================================================

#[test]
fn connection_lifecycle() {
    let mut state = SessionState::default();
    assert_eq!(state.status, ConnectionStatus::Connecting);
    state.accept_connection("u-9".into());
    assert_eq!(state.status, ConnectionStatus::Connected);
    assert_eq!(state.user_id.as_deref(), Some("u-9"));
    state.mark_disconnected();
    assert_eq!(state.status, ConnectionStatus::Disconnected);
    state.mark_connecting();
    assert_eq!(state.status, ConnectionStatus::Connecting);
}

#[test]
fn status_colors() {
    assert_eq!(ConnectionStatus::Connected.color(), Some("#00dd88"));
    assert_eq!(ConnectionStatus::Disconnected.color(), Some("#ff3366"));
    assert_eq!(ConnectionStatus::Connecting.color(), None);
}

#[test]
fn ownership_needs_matching_known_ids() {
    let mut state = SessionState::default();
    assert!(!state.is_own(None));
    assert!(!state.is_own(Some("u-1")));
    state.accept_connection("u-1".into());
    assert!(state.is_own(Some("u-1")));
    assert!(!state.is_own(Some("u-2")));
    assert!(!state.is_own(None));
}

#[test]
fn online_count_is_recorded() {
    let mut state = SessionState::default();
    assert_eq!(state.online_text(), "");
    state.record_online_count(4);
    assert_eq!(state.online_count, Some(4));
    assert_eq!(state.online_text(), "4 users online");
    state.record_online_count(1);
    assert_eq!(state.online_text(), "1 user online");
}

// =============================================================
// Reconnect
// =============================================================

#[test]
fn reconnect_of_a_joined_session_rejoins_with_the_new_id() {
    let mut state = joined(Some("u-1"));
    state.mark_disconnected();
    state.mark_connecting();

    let rejoin = state.accept_connection("u-2".into()).expect("rejoin");
    assert_eq!(
        rejoin,
        OutboundEvent::Join { user_id: Some("u-2".into()), username: "ada".into(), room_id: "lab".into() }
    );
    assert!(state.accept_connection("u-2".into()).is_none(), "rejoin is sent once per reconnect");
}

#[test]
fn first_connection_never_rejoins() {
    let mut state = SessionState::default();
    assert!(state.accept_connection("u-1".into()).is_none());

    let mut early = joined(None);
    assert!(early.accept_connection("u-1".into()).is_none(), "join already carried this connection");
}

#[test]
fn reconnect_before_joining_sends_nothing() {
    let mut state = SessionState::default();
    state.accept_connection("u-1".into());
    state.mark_disconnected();
    assert!(state.accept_connection("u-2".into()).is_none());
}
