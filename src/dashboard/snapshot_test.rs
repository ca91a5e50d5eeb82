use serde_json::json;

use super::*;

#[test]
fn empty_object_decodes_to_all_absent() {
    let snap = DashboardSnapshot::from_value(json!({})).expect("decode");
    assert_eq!(snap, DashboardSnapshot::default());
}

#[test]
fn non_object_payload_is_an_error() {
    assert!(DashboardSnapshot::from_value(json!([1, 2, 3])).is_err());
    assert!(DashboardSnapshot::from_value(json!(null)).is_err());
    assert!(DashboardSnapshot::from_value(json!("risk")).is_err());
    assert!(DashboardSnapshot::from_value(json!(42)).is_err());
}

#[test]
fn array_payload_does_not_fill_fields_by_position() {
    let err = DashboardSnapshot::from_value(json!([null, null, 90, {"a": ["x"]}])).expect_err("array");
    assert!(err.to_string().contains("a dashboard snapshot object"), "{err}");
}

#[test]
fn decodes_core_fields() {
    let snap = DashboardSnapshot::from_value(json!({
        "sentiment": {"type": "positive", "value": 72},
        "emotions": {"happy": 60, "angry": 5, "sad": 10, "fear": 2, "excitement": 40},
        "toxicity": 12.5,
        "keywords": {"finance": ["wire transfer", "bank"]},
        "risk_score": 44,
        "message_count": 7,
        "mood_shift": null
    }))
    .expect("decode");

    let sentiment = snap.sentiment.expect("sentiment");
    assert_eq!(sentiment.kind, "positive");
    assert!((sentiment.value - 72.0).abs() < f64::EPSILON);
    assert_eq!(snap.emotions.map(Emotions::axes), Some([60.0, 5.0, 10.0, 2.0, 40.0]));
    assert_eq!(snap.toxicity, Some(12.5));
    assert_eq!(
        snap.keywords.expect("keywords").get("finance").map(Vec::len),
        Some(2)
    );
    assert_eq!(snap.risk_score, Some(44.0));
    assert_eq!(snap.message_count, Some(7.0));
    assert_eq!(snap.mood_shift, None);
}

#[test]
fn malformed_field_is_dropped_without_failing_the_snapshot() {
    let snap = DashboardSnapshot::from_value(json!({
        "risk_score": "very high",
        "toxicity": 30,
        "word_cloud": {"not": "a list"}
    }))
    .expect("decode");
    assert_eq!(snap.risk_score, None);
    assert_eq!(snap.word_cloud, None);
    assert_eq!(snap.toxicity, Some(30.0));
}

#[test]
fn server_only_fields_are_ignored() {
    let snap = DashboardSnapshot::from_value(json!({
        "message_id": "abc",
        "keyword_frequency": {"x": 3},
        "sentiment_history": [1, 2],
        "risk_history": [3, 4],
        "total_messages": 9,
        "avg_risk": 21
    }))
    .expect("decode");
    assert_eq!(snap.avg_risk, Some(21.0));
}

#[test]
fn partial_nested_objects_fill_defaults() {
    let snap = DashboardSnapshot::from_value(json!({
        "ai_thoughts": {"thought": "hmm"},
        "velocity": {"velocity": 3}
    }))
    .expect("decode");
    let thoughts = snap.ai_thoughts.expect("thoughts");
    assert_eq!(thoughts.thought, "hmm");
    assert!(thoughts.flags.is_empty());
    assert_eq!(thoughts.concern_level, None);
    let velocity = snap.velocity.expect("velocity");
    assert!(!velocity.burst_detected);
    assert_eq!(velocity.status, "");
}

#[test]
fn renamed_type_fields_decode() {
    let snap = DashboardSnapshot::from_value(json!({
        "personality_fingerprint": {"type": "analyst", "patterns": {"questions": 2}},
        "alerts": [{"level": "danger", "message": "Bot burst", "type": "spam"}]
    }))
    .expect("decode");
    assert_eq!(snap.personality_fingerprint.expect("fingerprint").kind, "analyst");
    let alerts = snap.alerts.expect("alerts");
    assert_eq!(alerts[0].kind, "spam");
    assert_eq!(alerts[0].level, "danger");
}

#[test]
fn empty_mood_shift_counts_as_absent() {
    let snap = DashboardSnapshot::from_value(json!({"mood_shift": ""})).expect("decode");
    assert_eq!(snap.mood_shift_text(), None);
    let snap = DashboardSnapshot::from_value(json!({"mood_shift": "Mood darkened"})).expect("decode");
    assert_eq!(snap.mood_shift_text(), Some("Mood darkened"));
}
