//! Heuristic disaster risk scoring for cities.
//!
//! Pure, deterministic formula-based models:
//! - flood risk from rainfall, elevation and drainage conditions
//! - landslide risk from slope, rainfall trigger and soil stability
//! - a combined assessment weighting flood over landslide
//!
//! All scores live on a 0-100 scale and band into four tiers
//! (Low / Medium / High / Critical) with fixed thresholds 20/40/70.
//! No I/O, no shared state; every function is safe to call concurrently.

use serde::Serialize;

pub mod band;
pub mod flood;
pub mod landslide;

pub use band::{OverallStatus, RiskLevel};
pub use flood::{flood_risk, FloodRisk};
pub use landslide::{landslide_risk, LandslideRisk};

/// Flood weight in the combined score; landslide takes the remainder.
const COMBINED_FLOOD_WEIGHT: f64 = 0.6;

/// Round to one decimal, the reporting precision for scores and factors.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Missing or zero numeric inputs fall back to the model default; bad
/// numeric input is never an error.
pub(crate) fn coerce(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

/// Current weather snapshot feeding a combined assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherSnapshot {
    pub rainfall: Option<f64>,
    pub humidity: Option<f64>,
    pub temperature: Option<f64>,
}

/// Echo of the inputs a combined assessment was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherConditions {
    pub rainfall: f64,
    pub humidity: f64,
    pub temperature: f64,
    pub elevation: f64,
}

/// Combined flood + landslide assessment for a city.
#[derive(Debug, Clone, Serialize)]
pub struct CityAssessment {
    pub city: String,
    pub flood_risk: FloodRisk,
    pub landslide_risk: LandslideRisk,
    pub combined_risk: f64,
    pub overall_status: OverallStatus,
    pub assessment_time: &'static str,
    pub weather_conditions: WeatherConditions,
}

/// Assess both hazards and combine them 60/40 (flood weighted higher).
/// Side-effect-free and callable concurrently without coordination.
pub fn assess_city_risk(city: &str, elevation: Option<f64>, weather: WeatherSnapshot) -> CityAssessment {
    let rainfall = weather.rainfall.unwrap_or(0.0);
    let humidity = weather.humidity.unwrap_or(70.0);
    let temperature = weather.temperature.unwrap_or(25.0);

    let flood = flood_risk(city, elevation, Some(rainfall), Some(humidity));
    let landslide = landslide_risk(city, elevation, Some(rainfall));

    let combined =
        flood.risk_score * COMBINED_FLOOD_WEIGHT + landslide.risk_score * (1.0 - COMBINED_FLOOD_WEIGHT);
    let overall_status = OverallStatus::from_score(combined);

    let elevation = coerce(elevation, 50.0);
    CityAssessment {
        city: city.to_string(),
        flood_risk: flood,
        landslide_risk: landslide,
        combined_risk: round1(combined),
        overall_status,
        assessment_time: "Current conditions",
        weather_conditions: WeatherConditions {
            rainfall: round1(rainfall),
            humidity: round1(humidity),
            temperature: round1(temperature),
            elevation: round1(elevation),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_score_is_convex_combination_of_hazard_scores() {
        let weather = WeatherSnapshot {
            rainfall: Some(80.0),
            humidity: Some(85.0),
            temperature: Some(28.0),
        };
        let assessment = assess_city_risk("Jakarta", Some(5.0), weather);

        let expected = assessment.flood_risk.risk_score * 0.6
            + assessment.landslide_risk.risk_score * 0.4;
        assert_eq!(assessment.combined_risk, round1(expected));
    }

    #[test]
    fn overall_status_bands_on_combined_score() {
        let stormy = WeatherSnapshot {
            rainfall: Some(120.0),
            humidity: Some(90.0),
            temperature: Some(27.0),
        };
        let critical = assess_city_risk("Jakarta", Some(2.0), stormy);
        assert!(critical.combined_risk >= 70.0);
        assert_eq!(critical.overall_status, OverallStatus::CriticalAlert);

        let calm = WeatherSnapshot::default();
        let low = assess_city_risk("Quito", Some(400.0), calm);
        assert!(low.combined_risk < 40.0);
    }

    #[test]
    fn missing_weather_fields_use_documented_defaults() {
        let assessment = assess_city_risk("X", Some(120.0), WeatherSnapshot::default());
        assert_eq!(assessment.weather_conditions.rainfall, 0.0);
        assert_eq!(assessment.weather_conditions.humidity, 70.0);
        assert_eq!(assessment.weather_conditions.temperature, 25.0);
        assert_eq!(assessment.weather_conditions.elevation, 120.0);
    }

    #[test]
    fn assessment_echoes_city_and_time_label() {
        let assessment = assess_city_risk("Bergen", Some(40.0), WeatherSnapshot::default());
        assert_eq!(assessment.city, "Bergen");
        assert_eq!(assessment.assessment_time, "Current conditions");
    }
}
