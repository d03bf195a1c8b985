//! Four-tier risk banding shared by flood, landslide and combined scores.
//!
//! Thresholds and colors are fixed: a score maps to exactly one tier, and
//! each tier maps to exactly one color. Bands are evaluated top-down with
//! the upper boundary inclusive (score >= threshold).

use serde::{Deserialize, Serialize};

/// Per-hazard risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Ordered (threshold, tier) table, first match wins.
const RISK_BANDS: [(f64, RiskLevel); 3] = [
    (70.0, RiskLevel::Critical),
    (40.0, RiskLevel::High),
    (20.0, RiskLevel::Medium),
];

impl RiskLevel {
    /// Band a 0-100 score into a tier.
    pub fn from_score(score: f64) -> Self {
        for (threshold, level) in RISK_BANDS {
            if score >= threshold {
                return level;
            }
        }
        RiskLevel::Low
    }

    /// Display color, bijective with the tier.
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "#00c851",
            RiskLevel::Medium => "#ffa500",
            RiskLevel::High => "#ff4444",
            RiskLevel::Critical => "#cc0000",
        }
    }
}

/// Combined-assessment status. Same thresholds as [`RiskLevel`], distinct
/// labels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallStatus {
    #[serde(rename = "🟢 Low Risk")]
    LowRisk,
    #[serde(rename = "🟡 Moderate Watch")]
    ModerateWatch,
    #[serde(rename = "🟠 High Alert")]
    HighAlert,
    #[serde(rename = "🔴 CRITICAL ALERT")]
    CriticalAlert,
}

const STATUS_BANDS: [(f64, OverallStatus); 3] = [
    (70.0, OverallStatus::CriticalAlert),
    (40.0, OverallStatus::HighAlert),
    (20.0, OverallStatus::ModerateWatch),
];

impl OverallStatus {
    pub fn from_score(score: f64) -> Self {
        for (threshold, status) in STATUS_BANDS {
            if score >= threshold {
                return status;
            }
        }
        OverallStatus::LowRisk
    }
}
