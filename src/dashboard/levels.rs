//! Threshold classification for categorical dashboard fields.

#[cfg(test)]
#[path = "levels_test.rs"]
mod levels_test;

/// Overall conversation risk band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// `< 33` low, `< 67` medium, otherwise high.
    pub fn from_score(score: f64) -> Self {
        if score < 33.0 {
            Self::Low
        } else if score < 67.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// CSS modifier, e.g. `risk-level low`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Anomaly index band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnomalyLevel {
    Low,
    Medium,
    High,
}

impl AnomalyLevel {
    /// `< 30` low, `< 60` medium, otherwise high.
    pub fn from_index(index: f64) -> Self {
        if index < 30.0 {
            Self::Low
        } else if index < 60.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Sentiment color keyed off the server's `sentiment.type`.
pub fn sentiment_color(kind: &str) -> &'static str {
    match kind {
        "positive" => "#00dd88",
        "negative" => "#ff3366",
        _ => "#00d9ff",
    }
}

/// Traffic-light tone for fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

impl Tone {
    /// `> 70` danger, `> 40` warning, otherwise success.
    pub fn for_energy(energy: f64) -> Self {
        if energy > 70.0 {
            Self::Danger
        } else if energy > 40.0 {
            Self::Warning
        } else {
            Self::Success
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// CSS custom property the fill color is taken from.
    pub fn css_var(self) -> &'static str {
        match self {
            Self::Success => "var(--success)",
            Self::Warning => "var(--warning)",
            Self::Danger => "var(--danger)",
        }
    }
}
