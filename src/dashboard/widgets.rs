//! Field-to-widget projection.
//!
//! Each [`Widget`] owns one or more snapshot fields. [`Widget::render`]
//! returns `None` when those fields are absent, which callers treat as "keep
//! the previous view".

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use super::alerts::{NOMINAL_PLACEHOLDER, derive_alerts};
use super::levels::{AnomalyLevel, RiskLevel, Tone, sentiment_color};
use super::snapshot::{
    AiAnalysis, AiSummary, AiThoughts, DashboardSnapshot, EmotionalMirror, Fingerprint, Intent,
    MentalStress, PhraseMap, Prediction, RecentMessage, Replies, ServerAlert, ThreatLevel,
    Velocity, WordCloudEntry, non_empty,
};
use super::view::{Check, Field, Meter, MessageRow, Notice, Tag, Text, WidgetView, Word};
use crate::util::format::{capitalize, format_number, percent, short_clock_time};

pub const NO_KEYWORDS: &str = "No keywords detected";
pub const NO_STRESS_INDICATORS: &str = "No stress indicators detected";
pub const NO_NOTIFICATIONS: &str = "Notifications will appear here...";
pub const NO_ANALYSIS: &str = "No analysis available";
pub const NO_SUMMARY: &str = "Summary will update every 3 messages...";
pub const NO_PREDICTION: &str = "AI will predict the next message...";
const AWAITING_DATA: &str = "Awaiting data...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Widget {
    MessageCount,
    AnomalyScore,
    AverageRisk,
    Sentiment,
    RiskLevel,
    Toxicity,
    Complexity,
    Keywords,
    Alerts,
    Traits,
    Anomaly,
    Metadata,
    MessageHistory,
    AiThoughts,
    AiAnalysis,
    AiInferences,
    AiSummary,
    ThreatLevel,
    Energy,
    Velocity,
    Topics,
    Tone,
    MentalStress,
    SpamCheck,
    PhishingCheck,
    LinkCheck,
    Fingerprint,
    Intent,
    WordCloud,
    EmotionalMirror,
    Prediction,
    Replies,
    Notifications,
}

impl Widget {
    /// Every widget, in panel order.
    pub const ALL: [Widget; 33] = [
        Widget::MessageCount,
        Widget::AnomalyScore,
        Widget::AverageRisk,
        Widget::Sentiment,
        Widget::RiskLevel,
        Widget::Toxicity,
        Widget::Complexity,
        Widget::Keywords,
        Widget::Alerts,
        Widget::Traits,
        Widget::Anomaly,
        Widget::Metadata,
        Widget::MessageHistory,
        Widget::AiThoughts,
        Widget::AiAnalysis,
        Widget::AiInferences,
        Widget::AiSummary,
        Widget::ThreatLevel,
        Widget::Energy,
        Widget::Velocity,
        Widget::Topics,
        Widget::Tone,
        Widget::MentalStress,
        Widget::SpamCheck,
        Widget::PhishingCheck,
        Widget::LinkCheck,
        Widget::Fingerprint,
        Widget::Intent,
        Widget::WordCloud,
        Widget::EmotionalMirror,
        Widget::Prediction,
        Widget::Replies,
        Widget::Notifications,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::MessageCount => "Messages",
            Self::AnomalyScore => "Anomaly Score",
            Self::AverageRisk => "Average Risk",
            Self::Sentiment => "Sentiment",
            Self::RiskLevel => "Risk Level",
            Self::Toxicity => "Toxicity",
            Self::Complexity => "Complexity",
            Self::Keywords => "Keywords",
            Self::Alerts => "Alerts",
            Self::Traits => "Personality Traits",
            Self::Anomaly => "Anomaly Detection",
            Self::Metadata => "Metadata",
            Self::MessageHistory => "Intercepted Messages",
            Self::AiThoughts => "AI Thoughts",
            Self::AiAnalysis => "AI Analysis",
            Self::AiInferences => "AI Inferences",
            Self::AiSummary => "Conversation Summary",
            Self::ThreatLevel => "Threat Level",
            Self::Energy => "AI Energy",
            Self::Velocity => "Message Velocity",
            Self::Topics => "Topics",
            Self::Tone => "Tone",
            Self::MentalStress => "Mental Stress",
            Self::SpamCheck => "Spam / Bot",
            Self::PhishingCheck => "Phishing",
            Self::LinkCheck => "Links",
            Self::Fingerprint => "Personality Fingerprint",
            Self::Intent => "Intent",
            Self::WordCloud => "Word Cloud",
            Self::EmotionalMirror => "AI Emotional Mirror",
            Self::Prediction => "Next Message Prediction",
            Self::Replies => "Reply Suggestions",
            Self::Notifications => "Notification Center",
        }
    }

    /// View shown before the first snapshot reaches this widget.
    pub fn placeholder(self) -> WidgetView {
        match self {
            Self::Keywords => WidgetView::Placeholder(NO_KEYWORDS),
            Self::Alerts => WidgetView::Placeholder(NOMINAL_PLACEHOLDER),
            Self::MentalStress => WidgetView::Placeholder(NO_STRESS_INDICATORS),
            Self::Notifications => WidgetView::Placeholder(NO_NOTIFICATIONS),
            Self::AiAnalysis => WidgetView::Placeholder(NO_ANALYSIS),
            Self::AiSummary => WidgetView::Placeholder(NO_SUMMARY),
            Self::Prediction => WidgetView::Placeholder(NO_PREDICTION),
            _ => WidgetView::Placeholder(AWAITING_DATA),
        }
    }

    /// Project the fields this widget owns, or `None` when they are absent.
    pub fn render(self, snap: &DashboardSnapshot) -> Option<WidgetView> {
        match self {
            Self::MessageCount => snap
                .message_count
                .map(|count| WidgetView::text(format_number(count), "stat-value")),
            Self::AnomalyScore => snap
                .anomaly_index
                .map(|index| WidgetView::text(percent(index), "stat-value")),
            Self::AverageRisk => snap.avg_risk.map(|risk| WidgetView::text(percent(risk), "stat-value")),
            Self::Sentiment => snap.sentiment.as_ref().map(|s| {
                WidgetView::Stack(vec![
                    WidgetView::Text(
                        Text::new(capitalize(&s.kind), "sentiment-type").with_color(sentiment_color(&s.kind)),
                    ),
                    WidgetView::text(percent(s.value), "sentiment-score"),
                ])
            }),
            Self::RiskLevel => snap.risk_score.map(|score| {
                let level = RiskLevel::from_score(score);
                WidgetView::text(level.label(), format!("risk-level {}", level.as_str()))
            }),
            Self::Toxicity => snap
                .toxicity
                .map(|t| WidgetView::Meter(Meter::new(percent(t), t, "toxicity-bar"))),
            Self::Complexity => snap
                .complexity
                .map(|c| WidgetView::Meter(Meter::new(format_number(c), c, "complexity-bar"))),
            Self::Keywords => render_keywords(snap),
            Self::Alerts => Some(render_alerts(snap)),
            Self::Traits => snap.personality_traits.as_ref().and_then(|traits| {
                score_fields(traits.iter().map(|(name, value)| (name, *value, *value)), "trait-fill")
            }),
            Self::Anomaly => snap.anomaly_index.map(|index| {
                let level = AnomalyLevel::from_index(index);
                WidgetView::text(
                    format!("Anomaly Level: {} ({})", level.label(), percent(index)),
                    "anomaly-desc",
                )
            }),
            Self::Metadata => render_metadata(snap),
            Self::MessageHistory => snap.recent_messages.as_deref().and_then(render_history),
            Self::AiThoughts => snap.ai_thoughts.as_ref().map(render_thoughts),
            Self::AiAnalysis => snap.ai_analysis.as_ref().map(render_analysis),
            Self::AiInferences => snap
                .ai_analysis
                .as_ref()
                .and_then(|a| a.key_topics.as_deref())
                .map(|topics| tag_list(topics, "inference-tag")),
            Self::AiSummary => snap.ai_summary.as_ref().map(render_summary),
            Self::ThreatLevel => snap.threat_level.as_ref().map(render_threat),
            Self::Energy => snap.ai_energy.map(|energy| {
                let tone = Tone::for_energy(energy);
                WidgetView::Meter(
                    Meter::new(percent(energy), energy, format!("energy-fill {}", tone.as_class()))
                        .with_color(tone.css_var()),
                )
            }),
            Self::Velocity => snap.velocity.as_ref().map(render_velocity),
            Self::Topics => snap.topic.as_ref().map(|topics| {
                WidgetView::Tags(
                    topics
                        .iter()
                        .map(|(name, score)| Tag::new(format!("{name} ({})", percent(*score)), "topic-tag"))
                        .collect(),
                )
            }),
            Self::Tone => snap.tone.as_ref().map(|tone| {
                WidgetView::Meter(Meter::new(capitalize(&tone.primary), tone.confidence, "tone-bar"))
            }),
            Self::MentalStress => snap.mental_stress.as_ref().map(render_stress),
            Self::SpamCheck => snap.spam_detection.map(|spam| {
                WidgetView::Check(security_check("Spam / Bot", spam.is_bot, "Detected!", "danger"))
            }),
            Self::PhishingCheck => snap.phishing.map(|phishing| {
                WidgetView::Check(security_check("Phishing", phishing.is_phishing, "Alert!", "danger"))
            }),
            Self::LinkCheck => snap.unsafe_links.map(|links| {
                let status = format!("{} Suspicious", links.count);
                WidgetView::Check(security_check("Links", links.count > 0, &status, "warning"))
            }),
            Self::Fingerprint => snap.personality_fingerprint.as_ref().map(render_fingerprint),
            Self::Intent => snap.ai_intent.as_ref().map(render_intent),
            Self::WordCloud => snap.word_cloud.as_deref().and_then(render_word_cloud),
            Self::EmotionalMirror => snap.ai_emotional_mirror.as_ref().map(render_mirror),
            Self::Prediction => snap.ai_prediction.as_ref().map(render_prediction),
            Self::Replies => snap.ai_replies.as_ref().and_then(render_replies),
            Self::Notifications => snap.alerts.as_deref().map(render_notifications),
        }
    }
}

/// Every widget with a view for this snapshot, in panel order.
pub fn project(snap: &DashboardSnapshot) -> Vec<(Widget, WidgetView)> {
    Widget::ALL
        .iter()
        .filter_map(|widget| widget.render(snap).map(|view| (*widget, view)))
        .collect()
}

/// Emoji for the AI's self-reported feeling.
pub fn feeling_emoji(feeling: &str) -> &'static str {
    match feeling {
        "curious" => "🤔",
        "concerned" => "😟",
        "amused" => "😄",
        "alarmed" => "😨",
        "intrigued" => "🧐",
        _ => "🤖",
    }
}

/// Notification icon by severity.
pub fn notice_icon(level: &str) -> &'static str {
    match level {
        "danger" => "🚨",
        "warning" => "⚠️",
        _ => "ℹ️",
    }
}

/// Fingerprint pattern bars scale a 0..=5 count onto the bar.
pub fn pattern_fill(value: f64) -> f64 {
    (value * 20.0).min(100.0)
}

fn render_keywords(snap: &DashboardSnapshot) -> Option<WidgetView> {
    if snap.keywords.is_none() && snap.suspicious_phrases.is_none() {
        return None;
    }
    let mut tags = phrase_tags(snap.keywords.as_ref(), "keyword-tag");
    tags.extend(
        snap.suspicious_phrases
            .iter()
            .flatten()
            .map(|phrase| Tag::new(phrase.as_str(), "keyword-tag warning")),
    );
    Some(if tags.is_empty() { WidgetView::Placeholder(NO_KEYWORDS) } else { WidgetView::Tags(tags) })
}

/// `{category}: a, b` per non-empty category.
fn phrase_tags(map: Option<&PhraseMap>, class: &str) -> Vec<Tag> {
    map.into_iter()
        .flatten()
        .filter(|(_, phrases)| !phrases.is_empty())
        .map(|(category, phrases)| {
            Tag::new(format!("{category}: {}", phrases.join(", ")), format!("{class} {category}"))
        })
        .collect()
}

fn render_alerts(snap: &DashboardSnapshot) -> WidgetView {
    let alerts = derive_alerts(snap);
    if alerts.is_empty() {
        return WidgetView::Placeholder(NOMINAL_PLACEHOLDER);
    }
    WidgetView::Tags(
        alerts
            .into_iter()
            .map(|alert| Tag::new(alert.text, format!("alert-item {}", alert.kind.as_str())))
            .collect(),
    )
}

/// One labeled meter per `(name, label value, fill)` entry; `None` when empty.
fn score_fields<'a>(
    entries: impl Iterator<Item = (&'a String, f64, f64)>,
    class: &str,
) -> Option<WidgetView> {
    let fields: Vec<Field> = entries
        .map(|(name, value, fill)| {
            Field::new(capitalize(name), WidgetView::Meter(Meter::new(percent(value), fill, class)))
        })
        .collect();
    if fields.is_empty() { None } else { Some(WidgetView::Fields(fields)) }
}

fn render_metadata(snap: &DashboardSnapshot) -> Option<WidgetView> {
    let mut fields = Vec::new();
    if let Some(s) = &snap.sentiment {
        fields.push(Field::new("Sentiment", WidgetView::text(format!("{} ({})", s.kind, percent(s.value)), "")));
    }
    if let Some(risk) = snap.risk_score {
        fields.push(Field::new("Risk", WidgetView::text(percent(risk), "")));
    }
    if let Some(complexity) = snap.complexity {
        fields.push(Field::new("Complexity", WidgetView::text(format!("{}/100", format_number(complexity)), "")));
    }
    if let Some(toxicity) = snap.toxicity {
        fields.push(Field::new("Toxicity", WidgetView::text(percent(toxicity), "")));
    }
    if let Some(anomaly) = snap.anomaly_index {
        fields.push(Field::new("Anomaly", WidgetView::text(percent(anomaly), "")));
    }
    if fields.is_empty() { None } else { Some(WidgetView::Fields(fields)) }
}

fn render_history(messages: &[RecentMessage]) -> Option<WidgetView> {
    if messages.is_empty() {
        return None;
    }
    Some(WidgetView::Messages(
        messages
            .iter()
            .map(|m| MessageRow {
                username: m.username.clone(),
                time: short_clock_time(&m.timestamp),
                text: m.text.clone(),
            })
            .collect(),
    ))
}

fn tag_list(items: &[String], class: &str) -> WidgetView {
    WidgetView::Tags(items.iter().map(|item| Tag::new(item.as_str(), class)).collect())
}

fn render_thoughts(thoughts: &AiThoughts) -> WidgetView {
    let mut fields = vec![Field::new(
        "AI Internal Monologue",
        WidgetView::markup("thought-text", &format!("\"{}\"", thoughts.thought)),
    )];
    if !thoughts.flags.is_empty() {
        fields.push(Field::new("Triggered Flags", tag_list(&thoughts.flags, "ai-flag")));
    }
    if !thoughts.data_points.is_empty() {
        fields.push(Field::new("Data Points Extracted", tag_list(&thoughts.data_points, "data-point")));
    }
    if let Some(level) = thoughts.concern_level {
        fields.push(Field::new(
            "Concern",
            WidgetView::Meter(Meter::new(
                format!("Concern Level: {}/10", format_number(level)),
                level * 10.0,
                "meter-fill",
            )),
        ));
    }
    WidgetView::Fields(fields)
}

fn render_analysis(analysis: &AiAnalysis) -> WidgetView {
    let mut fields = Vec::new();
    if let Some(sentiment) = non_empty(analysis.sentiment.as_ref()) {
        let score = analysis.sentiment_score.unwrap_or_default();
        fields.push(Field::new(
            "Sentiment",
            WidgetView::text(format!("{sentiment} ({})", percent(score)), "item-value"),
        ));
    }
    for (label, value) in [
        ("Primary Emotion", &analysis.primary_emotion),
        ("Intent", &analysis.intent),
        ("Psychological Insight", &analysis.psychological_insight),
    ] {
        if let Some(value) = non_empty(value.as_ref()) {
            fields.push(Field::new(label, WidgetView::text(value, "item-value")));
        }
    }
    if let Some(risk) = non_empty(analysis.risk_level.as_ref()) {
        fields.push(Field::new(
            "Risk Level",
            WidgetView::text(risk, format!("item-value risk-{}", risk.to_lowercase())),
        ));
    }
    if let Some(topics) = analysis.key_topics.as_deref().filter(|t| !t.is_empty()) {
        fields.push(Field::new("Key Topics", tag_list(topics, "inference-tag")));
    }
    if fields.is_empty() { WidgetView::Placeholder(NO_ANALYSIS) } else { WidgetView::Fields(fields) }
}

fn render_summary(summary: &AiSummary) -> WidgetView {
    let mut fields = Vec::new();
    for (label, value) in [
        ("Overview", &summary.overview),
        ("Conversation Mood", &summary.mood),
        ("Participant Dynamics", &summary.participants_dynamics),
    ] {
        if let Some(value) = non_empty(value.as_ref()) {
            fields.push(Field::new(label, WidgetView::text(value, "section-value")));
        }
    }
    if !summary.main_themes.is_empty() {
        fields.push(Field::new("Main Themes", tag_list(&summary.main_themes, "theme-tag")));
    }
    if let Some(patterns) = non_empty(summary.notable_patterns.as_ref()) {
        fields.push(Field::new("Notable Patterns", WidgetView::text(patterns, "section-value")));
    }
    if let Some(concerns) = non_empty(summary.concerns.as_ref()).filter(|c| *c != "none") {
        fields.push(Field::new("Concerns", WidgetView::text(concerns, "section-value danger")));
    }
    if let Some(prediction) = non_empty(summary.prediction.as_ref()) {
        fields.push(Field::new("Prediction", WidgetView::text(prediction, "section-value")));
    }
    if fields.is_empty() { WidgetView::Placeholder(NO_SUMMARY) } else { WidgetView::Fields(fields) }
}

fn render_threat(threat: &ThreatLevel) -> WidgetView {
    WidgetView::Stack(vec![
        WidgetView::text(threat.label.as_str(), format!("threat-indicator {}", threat.level)),
        WidgetView::text(percent(threat.score), "threat-score"),
    ])
}

fn render_velocity(velocity: &Velocity) -> WidgetView {
    let mut items = vec![
        WidgetView::text(format_number(velocity.velocity), "velocity-value"),
        WidgetView::text(capitalize(&velocity.status), format!("velocity-status {}", velocity.status)),
    ];
    if velocity.burst_detected {
        items.push(WidgetView::Tags(vec![Tag::new("Burst detected", "burst")]));
    }
    WidgetView::Stack(items)
}

fn render_stress(stress: &MentalStress) -> WidgetView {
    let color = if stress.alert { Tone::Danger } else { Tone::Success }.css_var();
    let meter = Meter::new(percent(stress.warning_level), stress.warning_level, "stress-fill").with_color(color);
    let tags = phrase_tags(Some(&stress.indicators), "stress-alert");
    let indicators = if tags.is_empty() {
        WidgetView::Placeholder(NO_STRESS_INDICATORS)
    } else {
        WidgetView::Tags(tags)
    };
    WidgetView::Stack(vec![WidgetView::Meter(meter), indicators])
}

fn security_check(name: &'static str, flagged: bool, alarm: &str, severity: &'static str) -> Check {
    if flagged {
        Check { name, icon: "⚠", status: alarm.to_owned(), class: severity }
    } else {
        Check { name, icon: "✓", status: "Clear".to_owned(), class: "safe" }
    }
}

fn render_fingerprint(fingerprint: &Fingerprint) -> WidgetView {
    let kind = WidgetView::text(
        capitalize(&fingerprint.kind),
        format!("fingerprint-type {}", fingerprint.kind),
    );
    let patterns: Vec<Field> = fingerprint
        .patterns
        .iter()
        .map(|(name, value)| {
            Field::new(
                capitalize(name),
                WidgetView::Meter(Meter::new(format_number(*value), pattern_fill(*value), "pattern-fill")),
            )
        })
        .collect();
    if patterns.is_empty() {
        kind
    } else {
        WidgetView::Stack(vec![kind, WidgetView::Fields(patterns)])
    }
}

fn render_intent(intent: &Intent) -> WidgetView {
    let primary = non_empty(intent.primary_intent.as_ref()).map_or_else(|| "Unknown".to_owned(), capitalize);
    let mut items = vec![WidgetView::text(primary, "intent-primary")];
    if let Some(subtext) = non_empty(intent.emotional_subtext.as_ref()) {
        items.push(WidgetView::text(subtext, "intent-subtext"));
    }
    WidgetView::stack(items)
}

fn render_word_cloud(words: &[WordCloudEntry]) -> Option<WidgetView> {
    if words.is_empty() {
        return None;
    }
    Some(WidgetView::Words(
        words
            .iter()
            .map(|w| Word { text: w.word.clone(), font_px: w.size, opacity: 0.5 + w.count / 10.0 })
            .collect(),
    ))
}

fn render_mirror(mirror: &EmotionalMirror) -> WidgetView {
    let feeling = non_empty(mirror.ai_feeling.as_ref());
    let mut items = vec![WidgetView::text(
        format!("{} {}", feeling_emoji(feeling.unwrap_or_default()), feeling.unwrap_or("Neutral")),
        "feeling-text",
    )];
    if let Some(response) = non_empty(mirror.emotional_response.as_ref()) {
        items.push(WidgetView::markup("ai-response", response));
    }
    if let Some(intensity) = mirror.intensity {
        items.push(WidgetView::Meter(Meter::new(percent(intensity), intensity, "intensity-fill")));
    }
    WidgetView::stack(items)
}

fn render_prediction(prediction: &Prediction) -> WidgetView {
    WidgetView::Stack(vec![
        WidgetView::markup("prediction-text", &format!("\"{}\"", prediction.prediction)),
        WidgetView::text(format!("Confidence: {}", percent(prediction.confidence)), "confidence"),
        WidgetView::text(prediction.reasoning.as_str(), "reasoning"),
    ])
}

fn render_replies(replies: &Replies) -> Option<WidgetView> {
    let fields: Vec<Field> = [
        ("Casual", &replies.casual),
        ("Thoughtful", &replies.thoughtful),
        ("Brief", &replies.brief),
    ]
    .into_iter()
    .filter_map(|(label, text)| {
        non_empty(text.as_ref()).map(|text| Field::new(label, WidgetView::text(text, "reply-text")))
    })
    .collect();
    if fields.is_empty() { None } else { Some(WidgetView::Fields(fields)) }
}

fn render_notifications(alerts: &[ServerAlert]) -> WidgetView {
    if alerts.is_empty() {
        return WidgetView::Placeholder(NO_NOTIFICATIONS);
    }
    WidgetView::Notices(
        alerts
            .iter()
            .map(|alert| Notice {
                icon: notice_icon(&alert.level),
                message: alert.message.clone(),
                kind: alert.kind.clone(),
                class: format!("notification-item {}", alert.level),
            })
            .collect(),
    )
}
