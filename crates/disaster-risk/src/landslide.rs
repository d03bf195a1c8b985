//! Landslide risk scoring.
//!
//! Slope (50%), rainfall trigger (35%) and soil instability (15%). The
//! slope factor is piecewise by elevation tier and intentionally
//! discontinuous at the tier boundaries.

use serde::Serialize;

use crate::band::RiskLevel;
use crate::{coerce, round1};

/// Landslide risk assessment for one location.
#[derive(Debug, Clone, Serialize)]
pub struct LandslideRisk {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_color: &'static str,
    pub slope_factor: f64,
    pub rainfall_factor: f64,
    pub soil_factor: f64,
    pub warnings: Vec<String>,
    pub actions: Vec<String>,
    pub details: LandslideDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandslideDetails {
    pub elevation: f64,
    pub current_rainfall: f64,
    pub terrain_type: &'static str,
}

/// Terrain classification by elevation, informational only.
fn terrain_type(elevation: f64) -> &'static str {
    if elevation > 500.0 {
        "Mountainous"
    } else if elevation > 200.0 {
        "Hilly"
    } else if elevation > 100.0 {
        "Rolling"
    } else {
        "Flat"
    }
}

/// Piecewise slope proxy. Tier boundaries do not join smoothly; the jumps
/// are part of the tuned model.
fn slope_factor(elevation: f64) -> f64 {
    if elevation > 500.0 {
        (elevation / 10.0).min(100.0)
    } else if elevation > 200.0 {
        (elevation / 15.0).min(80.0)
    } else if elevation > 100.0 {
        (elevation / 20.0).min(60.0)
    } else {
        (elevation / 30.0).max(0.0)
    }
}

/// Score landslide risk for a city from elevation (m) and rainfall
/// (mm/24h). Missing or zero inputs fall back to defaults (elevation 50,
/// rainfall 0); never fails on numeric input.
pub fn landslide_risk(_city: &str, elevation: Option<f64>, rainfall: Option<f64>) -> LandslideRisk {
    let elevation = coerce(elevation, 50.0);
    let rainfall = coerce(rainfall, 0.0);

    let slope_factor = slope_factor(elevation);
    // Saturates at 80mm/24h.
    let rainfall_factor = ((rainfall / 80.0) * 100.0).clamp(0.0, 100.0);
    // Soil stability, lower = less stable.
    let soil_factor = (100.0 - rainfall * 0.8).clamp(0.0, 100.0);

    let score = slope_factor * 0.5 + rainfall_factor * 0.35 + (100.0 - soil_factor) * 0.15;
    let level = RiskLevel::from_score(score);

    let mut warnings = Vec::new();
    if elevation > 500.0 && rainfall > 60.0 {
        warnings.push(
            "🔴 CRITICAL: Steep mountainous terrain + heavy rainfall = EXTREME LANDSLIDE RISK"
                .to_string(),
        );
    } else if elevation > 300.0 && rainfall > 50.0 {
        warnings.push("🔴 HIGH: Mountainous area with significant rainfall".to_string());
    } else if elevation > 200.0 && rainfall > 40.0 {
        warnings.push("🟠 MODERATE: Hilly terrain with elevated rainfall".to_string());
    } else if elevation > 100.0 {
        warnings.push("🟡 WATCH: Elevated terrain - monitor for landslide signs".to_string());
    }
    if rainfall > 80.0 {
        warnings
            .push("⚠️ Saturated soil conditions significantly increase landslide risk".to_string());
    } else if rainfall > 60.0 {
        warnings.push("⚠️ Heavy rainfall may destabilize slopes".to_string());
    }
    if score >= 70.0 {
        warnings.push("🚨 EXTREME LANDSLIDE RISK - Evacuate hillside areas".to_string());
    }

    let actions: Vec<String> = if score >= 70.0 {
        [
            "🚨 EVACUATE from hillside and valley areas IMMEDIATELY",
            "🚫 Avoid all travel near steep slopes",
            "📱 Report any cracks in ground to authorities",
            "👂 Listen for unusual sounds (rumbling, cracking)",
            "🏃 Move to stable, flat ground away from slopes",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else if score >= 40.0 {
        [
            "⚠️ Avoid travel near steep slopes and cliffs",
            "👂 Listen for unusual sounds (rumbling, trees cracking)",
            "👀 Watch for cracks in pavements or walls",
            "📱 Stay informed of weather warnings",
            "🏠 Inspect property for signs of ground movement",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else if score >= 20.0 {
        [
            "🌧️ Monitor rainfall levels closely",
            "🏠 Inspect property for new cracks",
            "👀 Watch for changes in landscape",
            "📋 Know evacuation routes",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else {
        vec!["✓ No immediate action required - maintain awareness".to_string()]
    };

    LandslideRisk {
        risk_score: round1(score),
        risk_level: level,
        risk_color: level.color(),
        slope_factor: round1(slope_factor),
        rainfall_factor: round1(rainfall_factor),
        soil_factor: round1(soil_factor),
        warnings,
        actions,
        details: LandslideDetails {
            elevation: round1(elevation),
            current_rainfall: round1(rainfall),
            terrain_type: terrain_type(elevation),
        },
    }
}
