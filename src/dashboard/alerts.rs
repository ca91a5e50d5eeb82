//! Locally derived alerts.
//!
//! Recomputed from scratch for every snapshot; nothing carries over from the
//! previous one. Independent from the server's notification list.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use super::snapshot::DashboardSnapshot;

/// Shown as the sole entry when no rule fires.
pub const NOMINAL_PLACEHOLDER: &str = "System nominal";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Threat,
    Pattern,
    Mood,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Threat => "threat",
            Self::Pattern => "pattern",
            Self::Mood => "mood",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedAlert {
    pub text: String,
    pub kind: AlertKind,
}

impl DerivedAlert {
    fn new(text: impl Into<String>, kind: AlertKind) -> Self {
        Self { text: text.into(), kind }
    }
}

/// Evaluate the alert rules in their fixed order. Absent fields never fire.
pub fn derive_alerts(snap: &DashboardSnapshot) -> Vec<DerivedAlert> {
    let above = |field: Option<f64>, threshold: f64| field.is_some_and(|v| v > threshold);

    let mut alerts = Vec::new();
    if above(snap.risk_score, 65.0) {
        alerts.push(DerivedAlert::new("Potential Threat Rising", AlertKind::Threat));
    }
    if above(snap.anomaly_index, 60.0) {
        alerts.push(DerivedAlert::new("Pattern Detected", AlertKind::Pattern));
    }
    if let Some(shift) = snap.mood_shift_text() {
        alerts.push(DerivedAlert::new(shift, AlertKind::Mood));
    }
    if snap.keywords.as_ref().is_some_and(|k| !k.is_empty()) {
        alerts.push(DerivedAlert::new("Keyword Cluster Triggered", AlertKind::Pattern));
    }
    if above(snap.toxicity, 40.0) {
        alerts.push(DerivedAlert::new("Hostile Content Detected", AlertKind::Threat));
    }
    if above(snap.message_count, 50.0) && above(snap.anomaly_index, 50.0) {
        alerts.push(DerivedAlert::new("AI Flags Conversation Instability", AlertKind::Threat));
    }
    alerts
}
