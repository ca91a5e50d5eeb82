use serde_json::json;

use super::*;

fn data(set: &ChartSet, id: ChartId) -> Vec<f64> {
    set.get(id).map(|c| c.data.clone()).expect("chart")
}

#[test]
fn seeded_set_has_every_chart_with_seed_data() {
    let set = ChartSet::seeded();
    for id in ChartId::ALL {
        assert_eq!(set.get(id).map(|c| c.id), Some(id));
    }
    assert_eq!(data(&set, ChartId::SentimentGauge), vec![50.0, 50.0]);
    assert_eq!(data(&set, ChartId::RiskGauge), vec![30.0, 70.0]);
    assert_eq!(data(&set, ChartId::AnomalyGauge), vec![25.0, 75.0]);
    assert_eq!(data(&set, ChartId::EmotionRadar), vec![30.0, 20.0, 25.0, 15.0, 40.0]);
    assert_eq!(data(&set, ChartId::SentimentTimeline), vec![50.0; 20]);
    assert_eq!(data(&set, ChartId::RiskTimeline), vec![30.0; 20]);
    assert_eq!(set.revision(), 0);
}

#[test]
fn seeded_timeline_labels_run_one_to_twenty() {
    let set = ChartSet::seeded();
    let labels = &set.get(ChartId::RiskTimeline).expect("chart").labels;
    assert_eq!(labels.len(), 20);
    assert_eq!(labels.first().map(String::as_str), Some("1"));
    assert_eq!(labels.last().map(String::as_str), Some("20"));
    let radar = &set.get(ChartId::EmotionRadar).expect("chart").labels;
    assert_eq!(radar, &RADAR_LABELS.map(str::to_owned).to_vec());
}

#[test]
fn apply_sets_gauges_radar_and_timelines() {
    let mut set = ChartSet::seeded();
    let snap = DashboardSnapshot::from_value(json!({
        "sentiment": {"type": "positive", "value": 80},
        "risk_score": 12,
        "anomaly_index": 40,
        "emotions": {"happy": 1, "angry": 2, "sad": 3, "fear": 4, "excitement": 5}
    }))
    .expect("snapshot");
    let mut sentiments = RollingBuffer::new(20);
    sentiments.push(80.0);
    let mut risks = RollingBuffer::new(20);
    risks.push(10.0);
    risks.push(12.0);

    set.apply(&snap, &sentiments, &risks);

    assert_eq!(data(&set, ChartId::SentimentGauge), vec![80.0, 20.0]);
    assert_eq!(data(&set, ChartId::RiskGauge), vec![12.0, 88.0]);
    assert_eq!(data(&set, ChartId::AnomalyGauge), vec![40.0, 60.0]);
    assert_eq!(data(&set, ChartId::EmotionRadar), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(data(&set, ChartId::SentimentTimeline), vec![80.0]);
    let risk = set.get(ChartId::RiskTimeline).expect("chart");
    assert_eq!(risk.data, vec![10.0, 12.0]);
    assert_eq!(risk.labels, vec!["1", "2"]);
    assert_eq!(set.revision(), 1);
}

#[test]
fn absent_fields_keep_previous_chart_data() {
    let mut set = ChartSet::seeded();
    let empty = RollingBuffer::new(20);
    set.apply(&DashboardSnapshot::default(), &empty, &empty);
    assert_eq!(data(&set, ChartId::RiskGauge), vec![30.0, 70.0]);
    assert_eq!(data(&set, ChartId::SentimentTimeline), vec![50.0; 20]);
}

#[test]
fn gauge_value_is_clamped() {
    let mut set = ChartSet::seeded();
    let snap = DashboardSnapshot { risk_score: Some(140.0), ..DashboardSnapshot::default() };
    let empty = RollingBuffer::new(20);
    set.apply(&snap, &empty, &empty);
    assert_eq!(data(&set, ChartId::RiskGauge), vec![100.0, 0.0]);
}

#[test]
fn kinds_and_styles() {
    assert_eq!(ChartId::AnomalyGauge.kind(), ChartKind::Gauge);
    assert_eq!(ChartId::EmotionRadar.kind(), ChartKind::Radar);
    assert_eq!(ChartId::RiskTimeline.kind(), ChartKind::Line);
    assert_eq!(ChartId::RiskTimeline.style().stroke, "#ff3366");
    assert_eq!(ChartId::AnomalyGauge.style().stroke, "#ffaa00");
}
