//! Chart instances and their data arrays.
//!
//! The set is created once, with fixed seed data, on first dashboard
//! activation. Later snapshots only replace data arrays; the canvas layer
//! redraws from whatever the set currently holds.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use super::rolling::RollingBuffer;
use super::snapshot::DashboardSnapshot;
use crate::util::format::clamp_percent;

pub const RADAR_LABELS: [&str; 5] = ["Happy", "Angry", "Sad", "Fear", "Excitement"];
pub const RADAR_MAX: f64 = 100.0;
const TIMELINE_SEED_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartId {
    SentimentGauge,
    RiskGauge,
    AnomalyGauge,
    EmotionRadar,
    SentimentTimeline,
    RiskTimeline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Doughnut of `[value, 100 - value]`.
    Gauge,
    Radar,
    Line,
}

/// Colors for one chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartStyle {
    pub stroke: &'static str,
    pub fill: &'static str,
}

pub const GAUGE_TRACK: &str = "#f0f0f0";
pub const GRID_COLOR: &str = "#2a3050";
pub const TICK_COLOR: &str = "#b0b0b0";

impl ChartId {
    pub const ALL: [ChartId; 6] = [
        ChartId::SentimentGauge,
        ChartId::RiskGauge,
        ChartId::AnomalyGauge,
        ChartId::EmotionRadar,
        ChartId::SentimentTimeline,
        ChartId::RiskTimeline,
    ];

    pub fn kind(self) -> ChartKind {
        match self {
            Self::SentimentGauge | Self::RiskGauge | Self::AnomalyGauge => ChartKind::Gauge,
            Self::EmotionRadar => ChartKind::Radar,
            Self::SentimentTimeline | Self::RiskTimeline => ChartKind::Line,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SentimentGauge => "Sentiment",
            Self::RiskGauge => "Risk",
            Self::AnomalyGauge => "Anomaly",
            Self::EmotionRadar => "Emotions",
            Self::SentimentTimeline => "Sentiment Score",
            Self::RiskTimeline => "Risk Score",
        }
    }

    pub fn style(self) -> ChartStyle {
        match self {
            Self::SentimentGauge | Self::EmotionRadar | Self::SentimentTimeline => {
                ChartStyle { stroke: "#00d9ff", fill: "rgba(0, 217, 255, 0.1)" }
            }
            Self::RiskGauge => ChartStyle { stroke: "#00dd88", fill: "#00dd88" },
            Self::AnomalyGauge => ChartStyle { stroke: "#ffaa00", fill: "#ffaa00" },
            Self::RiskTimeline => ChartStyle { stroke: "#ff3366", fill: "rgba(255, 51, 102, 0.1)" },
        }
    }

    fn seed(self) -> Vec<f64> {
        match self {
            Self::SentimentGauge => vec![50.0, 50.0],
            Self::RiskGauge => vec![30.0, 70.0],
            Self::AnomalyGauge => vec![25.0, 75.0],
            Self::EmotionRadar => vec![30.0, 20.0, 25.0, 15.0, 40.0],
            Self::SentimentTimeline => vec![50.0; TIMELINE_SEED_LEN],
            Self::RiskTimeline => vec![30.0; TIMELINE_SEED_LEN],
        }
    }

    fn index(self) -> usize {
        match self {
            Self::SentimentGauge => 0,
            Self::RiskGauge => 1,
            Self::AnomalyGauge => 2,
            Self::EmotionRadar => 3,
            Self::SentimentTimeline => 4,
            Self::RiskTimeline => 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub id: ChartId,
    pub data: Vec<f64>,
    pub labels: Vec<String>,
}

impl Chart {
    fn seeded(id: ChartId) -> Self {
        let data = id.seed();
        let labels = match id.kind() {
            ChartKind::Gauge => Vec::new(),
            ChartKind::Radar => RADAR_LABELS.iter().map(|l| (*l).to_owned()).collect(),
            ChartKind::Line => ordinal_labels(data.len()),
        };
        Self { id, data, labels }
    }

    fn set_gauge(&mut self, value: f64) {
        let value = clamp_percent(value);
        self.data = vec![value, 100.0 - value];
    }

    fn set_series(&mut self, values: Vec<f64>) {
        self.labels = ordinal_labels(values.len());
        self.data = values;
    }
}

/// The six dashboard charts.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSet {
    charts: Vec<Chart>,
    /// Bumped on every update so views know to redraw.
    revision: u64,
}

impl ChartSet {
    pub fn seeded() -> Self {
        Self { charts: ChartId::ALL.iter().map(|id| Chart::seeded(*id)).collect(), revision: 0 }
    }

    pub fn get(&self, id: ChartId) -> Option<&Chart> {
        self.charts.get(id.index())
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace data arrays from `snap`; timelines take the rolling buffers.
    /// Charts whose source field is absent keep their data.
    pub fn apply(
        &mut self,
        snap: &DashboardSnapshot,
        sentiments: &RollingBuffer<f64>,
        risks: &RollingBuffer<f64>,
    ) {
        if let Some(sentiment) = &snap.sentiment {
            self.chart_mut(ChartId::SentimentGauge, |c| c.set_gauge(sentiment.value));
        }
        if let Some(risk) = snap.risk_score {
            self.chart_mut(ChartId::RiskGauge, |c| c.set_gauge(risk));
        }
        if let Some(anomaly) = snap.anomaly_index {
            self.chart_mut(ChartId::AnomalyGauge, |c| c.set_gauge(anomaly));
        }
        if let Some(emotions) = snap.emotions {
            self.chart_mut(ChartId::EmotionRadar, |c| c.data = emotions.axes().to_vec());
        }
        if !sentiments.is_empty() {
            self.chart_mut(ChartId::SentimentTimeline, |c| c.set_series(sentiments.to_vec()));
        }
        if !risks.is_empty() {
            self.chart_mut(ChartId::RiskTimeline, |c| c.set_series(risks.to_vec()));
        }
        self.revision = self.revision.wrapping_add(1);
    }

    fn chart_mut(&mut self, id: ChartId, update: impl FnOnce(&mut Chart)) {
        if let Some(chart) = self.charts.get_mut(id.index()) {
            update(chart);
        }
    }
}

/// `"1"..="n"`.
fn ordinal_labels(len: usize) -> Vec<String> {
    (1..=len).map(|i| i.to_string()).collect()
}
