//! Wire model of a `dashboard_update` payload.
//!
//! Every field is optional and decoded independently: a field whose JSON has
//! the wrong shape is dropped to `None` (and logged at debug level) instead of
//! failing the whole snapshot. Server-only fields are ignored.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Category name -> matched phrases.
pub type PhraseMap = BTreeMap<String, Vec<String>>;

/// Name -> 0..=100 score.
pub type ScoreMap = BTreeMap<String, f64>;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    #[serde(default, deserialize_with = "lenient")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, deserialize_with = "lenient")]
    pub emotions: Option<Emotions>,
    #[serde(default, deserialize_with = "lenient")]
    pub toxicity: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub keywords: Option<PhraseMap>,
    #[serde(default, deserialize_with = "lenient")]
    pub complexity: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub suspicious_phrases: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub risk_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub personality_traits: Option<ScoreMap>,
    #[serde(default, deserialize_with = "lenient")]
    pub anomaly_index: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub mood_shift: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub avg_risk: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub recent_messages: Option<Vec<RecentMessage>>,
    #[serde(default, deserialize_with = "lenient")]
    pub ai_thoughts: Option<AiThoughts>,
    #[serde(default, deserialize_with = "lenient")]
    pub ai_analysis: Option<AiAnalysis>,
    #[serde(default, deserialize_with = "lenient")]
    pub ai_summary: Option<AiSummary>,
    #[serde(default, deserialize_with = "lenient")]
    pub threat_level: Option<ThreatLevel>,
    #[serde(default, deserialize_with = "lenient")]
    pub ai_energy: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub velocity: Option<Velocity>,
    #[serde(default, deserialize_with = "lenient")]
    pub topic: Option<ScoreMap>,
    #[serde(default, deserialize_with = "lenient")]
    pub tone: Option<ToneReading>,
    #[serde(default, deserialize_with = "lenient")]
    pub mental_stress: Option<MentalStress>,
    #[serde(default, deserialize_with = "lenient")]
    pub spam_detection: Option<SpamDetection>,
    #[serde(default, deserialize_with = "lenient")]
    pub phishing: Option<Phishing>,
    #[serde(default, deserialize_with = "lenient")]
    pub unsafe_links: Option<UnsafeLinks>,
    #[serde(default, deserialize_with = "lenient")]
    pub personality_fingerprint: Option<Fingerprint>,
    #[serde(default, deserialize_with = "lenient")]
    pub ai_intent: Option<Intent>,
    #[serde(default, deserialize_with = "lenient")]
    pub word_cloud: Option<Vec<WordCloudEntry>>,
    #[serde(default, deserialize_with = "lenient")]
    pub ai_emotional_mirror: Option<EmotionalMirror>,
    #[serde(default, deserialize_with = "lenient")]
    pub ai_prediction: Option<Prediction>,
    #[serde(default, deserialize_with = "lenient")]
    pub ai_replies: Option<Replies>,
    #[serde(default, deserialize_with = "lenient")]
    pub alerts: Option<Vec<ServerAlert>>,
}

impl DashboardSnapshot {
    /// Decode a snapshot from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error only when `value` is not a JSON object. Arrays are
    /// rejected up front; serde would otherwise map them onto fields by
    /// position.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.is_object() {
            return serde_json::from_value(value);
        }
        let unexpected = match &value {
            Value::Object(_) => Unexpected::Map,
            Value::Null => Unexpected::Unit,
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Number(_) => Unexpected::Other("number"),
            Value::String(s) => Unexpected::Str(s),
            Value::Array(_) => Unexpected::Seq,
        };
        Err(serde::de::Error::invalid_type(unexpected, &"a dashboard snapshot object"))
    }

    /// Mood-shift text, treating an empty string like an absent field.
    pub fn mood_shift_text(&self) -> Option<&str> {
        non_empty(self.mood_shift.as_ref())
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Sentiment {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Emotions {
    pub happy: f64,
    pub angry: f64,
    pub sad: f64,
    pub fear: f64,
    pub excitement: f64,
}

impl Emotions {
    /// Radar axis order: Happy, Angry, Sad, Fear, Excitement.
    pub fn axes(self) -> [f64; 5] {
        [self.happy, self.angry, self.sad, self.fear, self.excitement]
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecentMessage {
    pub username: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AiThoughts {
    pub thought: String,
    pub flags: Vec<String>,
    pub data_points: Vec<String>,
    pub concern_level: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AiAnalysis {
    pub sentiment: Option<String>,
    pub sentiment_score: Option<f64>,
    pub primary_emotion: Option<String>,
    pub intent: Option<String>,
    pub psychological_insight: Option<String>,
    pub risk_level: Option<String>,
    pub key_topics: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AiSummary {
    pub overview: Option<String>,
    pub mood: Option<String>,
    pub participants_dynamics: Option<String>,
    pub main_themes: Vec<String>,
    pub notable_patterns: Option<String>,
    pub concerns: Option<String>,
    pub prediction: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThreatLevel {
    pub level: String,
    pub label: String,
    pub score: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Velocity {
    pub velocity: f64,
    pub status: String,
    pub burst_detected: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToneReading {
    pub primary: String,
    pub confidence: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MentalStress {
    pub warning_level: f64,
    pub alert: bool,
    pub indicators: PhraseMap,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SpamDetection {
    pub is_bot: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Phishing {
    pub is_phishing: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnsafeLinks {
    pub count: u64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Fingerprint {
    #[serde(rename = "type")]
    pub kind: String,
    pub patterns: ScoreMap,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Intent {
    pub primary_intent: Option<String>,
    pub emotional_subtext: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct WordCloudEntry {
    pub word: String,
    pub size: f64,
    pub count: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmotionalMirror {
    pub ai_feeling: Option<String>,
    pub emotional_response: Option<String>,
    pub intensity: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: f64,
    pub reasoning: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Replies {
    pub casual: Option<String>,
    pub thoughtful: Option<String>,
    pub brief: Option<String>,
}

/// Server-raised notification, rendered in the notification center.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerAlert {
    pub level: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `Some(text)` only for a present, non-empty string.
pub fn non_empty(text: Option<&String>) -> Option<&str> {
    text.map(String::as_str).filter(|t| !t.is_empty())
}

/// Decode one snapshot field, mapping `null` and shape mismatches to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            log::debug!("dashboard: skipping malformed field: {err}");
            Ok(None)
        }
    }
}
