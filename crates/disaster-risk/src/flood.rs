//! Flood risk scoring.
//!
//! Three named factors on a 0-100 scale, combined as a weighted average:
//! rainfall (40%), elevation (40%), drainage (20%). Each factor is clamped
//! before weighting, so the composite is in [0, 100] by construction.

use serde::Serialize;

use crate::band::RiskLevel;
use crate::{coerce, round1};

/// Flood risk assessment for one location.
#[derive(Debug, Clone, Serialize)]
pub struct FloodRisk {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_color: &'static str,
    pub rainfall_factor: f64,
    pub elevation_factor: f64,
    pub drainage_factor: f64,
    pub warnings: Vec<String>,
    pub actions: Vec<String>,
    pub details: FloodDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct FloodDetails {
    pub current_rainfall: f64,
    pub elevation: f64,
    pub humidity: f64,
    pub city: String,
}

/// Score flood risk for a city from elevation (m), rainfall (mm/24h) and
/// humidity (%). Missing or zero inputs fall back to documented defaults
/// (elevation 50, rainfall 0, humidity 70); the function never fails on
/// numeric input.
pub fn flood_risk(
    city: &str,
    elevation: Option<f64>,
    rainfall: Option<f64>,
    humidity: Option<f64>,
) -> FloodRisk {
    let elevation = coerce(elevation, 50.0);
    let rainfall = coerce(rainfall, 0.0);
    let humidity = coerce(humidity, 70.0);

    // Saturates at 100mm/24h.
    let rainfall_factor = ((rainfall / 100.0) * 100.0).clamp(0.0, 100.0);
    // Reaches zero at 200m elevation.
    let elevation_factor = (100.0 - elevation / 2.0).clamp(0.0, 100.0);
    // Scores how adverse drainage conditions are; the arithmetic is part of
    // the tuned model and must not be re-derived.
    let drainage_factor = (100.0 - humidity * 0.8).clamp(0.0, 100.0);

    let score = rainfall_factor * 0.4 + elevation_factor * 0.4 + drainage_factor * 0.2;
    let level = RiskLevel::from_score(score);

    let mut warnings = Vec::new();
    if rainfall > 75.0 {
        warnings.push(format!(
            "🔴 CRITICAL: Heavy rainfall detected ({rainfall:.1}mm/24h)"
        ));
    } else if rainfall > 50.0 {
        warnings.push(format!(
            "🟠 MODERATE: Significant rainfall expected ({rainfall:.1}mm/24h)"
        ));
    } else if rainfall > 25.0 {
        warnings.push(format!(
            "🟡 WATCH: Elevated rainfall levels ({rainfall:.1}mm/24h)"
        ));
    }
    if elevation < 10.0 {
        warnings.push(format!(
            "🔴 HIGH: Very low elevation area ({elevation:.1}m above sea level)"
        ));
    } else if elevation < 30.0 {
        warnings.push("🟠 MODERATE: Low elevation - potential flooding risk".to_string());
    }
    if humidity > 80.0 {
        warnings.push("⚠️ Poor drainage conditions due to high humidity".to_string());
    }
    if score >= 70.0 {
        warnings.push("🚨 EXTREME FLOOD RISK - Immediate action required".to_string());
    }

    let actions: Vec<String> = if score >= 70.0 {
        [
            "🚨 IMMEDIATE EVACUATION recommended for low-lying areas",
            "📱 Monitor emergency alerts and news constantly",
            "🎒 Keep emergency kit ready (food, water, medicine)",
            "🚗 Avoid driving through flooded areas",
            "🏠 Move to higher floors if possible",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else if score >= 40.0 {
        [
            "⚠️ Stay alert to weather changes",
            "🏠 Check and clear drainage systems",
            "📦 Move valuables to higher ground",
            "🔦 Prepare flashlights and batteries",
            "📱 Keep phone charged",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else if score >= 20.0 {
        [
            "👀 Monitor weather forecasts regularly",
            "🔧 Ensure drainage is clear",
            "📋 Review evacuation routes",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else {
        vec!["✓ Continue normal activities, stay informed of weather updates".to_string()]
    };

    FloodRisk {
        risk_score: round1(score),
        risk_level: level,
        risk_color: level.color(),
        rainfall_factor: round1(rainfall_factor),
        elevation_factor: round1(elevation_factor),
        drainage_factor: round1(drainage_factor),
        warnings,
        actions,
        details: FloodDetails {
            current_rainfall: round1(rainfall),
            elevation: round1(elevation),
            humidity: round1(humidity),
            city: city.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn low_coastal_city_in_heavy_rain_is_critical() {
        let risk = flood_risk("Jakarta", Some(5.0), Some(80.0), Some(85.0));
        assert_eq!(risk.rainfall_factor, 80.0);
        assert_eq!(risk.elevation_factor, 97.5);
        assert_eq!(risk.drainage_factor, 32.0);
        assert_eq!(risk.risk_score, 77.4);
        assert_eq!(risk.risk_level, RiskLevel::Critical);
        assert_eq!(risk.risk_color, "#cc0000");
    }

    #[test]
    fn missing_inputs_fall_back_to_defaults() {
        let risk = flood_risk("Nowhere", None, None, None);
        // elevation 50, rainfall 0, humidity 70
        assert_eq!(risk.details.elevation, 50.0);
        assert_eq!(risk.details.current_rainfall, 0.0);
        assert_eq!(risk.details.humidity, 70.0);
        // 0.4*0 + 0.4*75 + 0.2*44 = 38.8
        assert_eq!(risk.risk_score, 38.8);
        assert_eq!(risk.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn zero_elevation_coerces_like_missing() {
        let zeroed = flood_risk("X", Some(0.0), Some(10.0), Some(50.0));
        let missing = flood_risk("X", None, Some(10.0), Some(50.0));
        assert_eq!(zeroed.risk_score, missing.risk_score);
        assert_eq!(zeroed.details.elevation, 50.0);
    }

    #[test]
    fn rainfall_warnings_pick_single_highest_bucket() {
        let risk = flood_risk("X", Some(500.0), Some(76.0), Some(50.0));
        let rain_warnings: Vec<_> = risk
            .warnings
            .iter()
            .filter(|w| w.contains("mm/24h"))
            .collect();
        assert_eq!(rain_warnings.len(), 1);
        assert!(rain_warnings[0].contains("CRITICAL"));
    }

    #[test]
    fn extreme_warning_appended_last() {
        let risk = flood_risk("X", Some(2.0), Some(90.0), Some(90.0));
        assert!(risk.risk_score >= 70.0);
        assert_eq!(
            risk.warnings.last().unwrap(),
            "🚨 EXTREME FLOOD RISK - Immediate action required"
        );
    }

    #[test]
    fn action_tier_matches_score_band() {
        let calm = flood_risk("X", Some(400.0), Some(0.0), Some(10.0));
        assert!(calm.risk_score < 20.0);
        assert_eq!(calm.actions.len(), 1);

        let watch = flood_risk("X", Some(150.0), Some(20.0), Some(60.0));
        assert!(watch.risk_score >= 20.0 && watch.risk_score < 40.0);
        assert_eq!(watch.actions.len(), 3);

        let severe = flood_risk("X", Some(2.0), Some(90.0), Some(90.0));
        assert!(severe.risk_score >= 70.0);
        assert_eq!(severe.actions.len(), 5);
    }

    proptest! {
        #[test]
        fn score_and_factors_stay_in_bounds(
            elevation in 0.0f64..9000.0,
            rainfall in 0.0f64..500.0,
            humidity in 0.0f64..100.0,
        ) {
            let risk = flood_risk("prop", Some(elevation), Some(rainfall), Some(humidity));
            prop_assert!((0.0..=100.0).contains(&risk.risk_score));
            prop_assert!((0.0..=100.0).contains(&risk.rainfall_factor));
            prop_assert!((0.0..=100.0).contains(&risk.elevation_factor));
            prop_assert!((0.0..=100.0).contains(&risk.drainage_factor));
        }
    }
}
