#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::BTreeMap;

use crate::dashboard::charts::ChartSet;
use crate::dashboard::rolling::RollingBuffer;
use crate::dashboard::snapshot::DashboardSnapshot;
use crate::dashboard::view::WidgetView;
use crate::dashboard::widgets::{Widget, project};

/// State for the analytics panel.
#[derive(Clone, Debug)]
pub struct DashboardState {
    pub active: bool,
    pub sentiments: RollingBuffer<f64>,
    pub risks: RollingBuffer<f64>,
    /// Last view per widget; widgets never rendered fall back to their placeholder.
    pub widgets: BTreeMap<Widget, WidgetView>,
    /// Created on first activation and kept after that.
    pub charts: Option<ChartSet>,
    pub snapshots_seen: u64,
}

impl DashboardState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            active: false,
            sentiments: RollingBuffer::new(history_capacity),
            risks: RollingBuffer::new(history_capacity),
            widgets: BTreeMap::new(),
            charts: None,
            snapshots_seen: 0,
        }
    }

    /// Flip visibility; turning on creates the chart set the first time.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        if self.active && self.charts.is_none() {
            self.charts = Some(ChartSet::seeded());
        }
        self.active
    }

    /// Hide the panel. Charts and buffers are kept.
    pub fn close(&mut self) {
        self.active = false;
    }

    /// Fan a snapshot out to buffers, widgets and (while visible) charts.
    pub fn apply_snapshot(&mut self, snap: &DashboardSnapshot) {
        if let Some(sentiment) = &snap.sentiment {
            self.sentiments.push(sentiment.value);
        }
        if let Some(risk) = snap.risk_score {
            self.risks.push(risk);
        }
        for (widget, view) in project(snap) {
            self.widgets.insert(widget, view);
        }
        if self.active {
            if let Some(charts) = self.charts.as_mut() {
                charts.apply(snap, &self.sentiments, &self.risks);
            }
        }
        self.snapshots_seen += 1;
    }

    pub fn view(&self, widget: Widget) -> WidgetView {
        self.widgets.get(&widget).cloned().unwrap_or_else(|| widget.placeholder())
    }
}
