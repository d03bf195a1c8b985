//! Sea level projection for arbitrary cities.
//!
//! A degree-2 polynomial is fitted once over the fixed 1900-2024
//! calibration table; per-city projections scale the global curve by a
//! climate scenario multiplier and a location vulnerability factor.

use serde::{Deserialize, Serialize};

use crate::cities::{classify_location, VulnerabilityTier};
use crate::coastal::estimate_coastal_distance;
use crate::regression::QuadraticModel;
use crate::ModelError;

/// Global mean sea level calibration points (mm above the 1900 baseline).
/// Derived from tide-gauge and satellite altimetry composites.
const CALIBRATION_YEARS: [f64; 19] = [
    1900.0, 1910.0, 1920.0, 1930.0, 1940.0, 1950.0, 1960.0, 1970.0, 1980.0, 1990.0, 2000.0,
    2005.0, 2010.0, 2015.0, 2020.0, 2021.0, 2022.0, 2023.0, 2024.0,
];
const CALIBRATION_LEVELS_MM: [f64; 19] = [
    0.0, 10.0, 15.0, 25.0, 40.0, 50.0, 70.0, 95.0, 120.0, 155.0, 205.0, 225.0, 245.0, 270.0,
    282.0, 287.0, 291.0, 298.0, 305.0,
];

/// Climate projection scenario scaling the baseline global rise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Optimistic,
    #[default]
    Moderate,
    Pessimistic,
}

impl Scenario {
    /// Unknown scenario strings fall back to the moderate baseline.
    pub fn parse(s: &str) -> Self {
        match s {
            "optimistic" => Scenario::Optimistic,
            "pessimistic" => Scenario::Pessimistic,
            _ => Scenario::Moderate,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Scenario::Optimistic => 0.85,
            Scenario::Moderate => 1.0,
            Scenario::Pessimistic => 1.35,
        }
    }
}

/// Resolved coordinates for a city, elevation in meters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
    pub elevation: f64,
}

/// Projection for a single target year.
#[derive(Debug, Clone, Serialize)]
pub struct YearPrediction {
    pub year: i32,
    pub global_rise: f64,
    pub local_rise: f64,
    pub elevation: f64,
    pub flooding_risk: f64,
    pub vulnerability: VulnerabilityTier,
}

/// Per-city projection bundle, predictions in input year order.
#[derive(Debug, Clone, Serialize)]
pub struct CityProjection {
    pub city: String,
    pub predictions: Vec<YearPrediction>,
    pub city_factor: f64,
    pub elevation: f64,
    pub vulnerability: VulnerabilityTier,
}

/// Fitted, immutable sea level projector. Fit once at startup and share;
/// prediction is side-effect-free and safe to call concurrently.
#[derive(Debug, Clone)]
pub struct SeaLevelProjector {
    model: QuadraticModel,
}

impl SeaLevelProjector {
    /// Fit the regression over the calibration table. Deterministic: a
    /// second fit produces an identical model.
    pub fn fit() -> Result<Self, ModelError> {
        let model = QuadraticModel::fit(
            &CALIBRATION_YEARS,
            &CALIBRATION_LEVELS_MM,
            CALIBRATION_YEARS[0],
        )?;
        Ok(Self { model })
    }

    /// Baseline (moderate scenario) global rise in mm for a year.
    pub fn global_rise_mm(&self, year: i32) -> f64 {
        self.model.predict(f64::from(year))
    }

    /// Project sea level rise and flooding risk for any city from its
    /// coordinates. The reference city table is not consulted; the
    /// vulnerability factor is derived from elevation and coastal distance.
    pub fn predict_any_city(
        &self,
        city: &str,
        coords: Coordinates,
        target_years: &[i32],
        scenario: Scenario,
    ) -> CityProjection {
        let elevation = coords.elevation;
        let coastal_distance = estimate_coastal_distance(coords.lat, coords.lon);
        let (vulnerability, factor) = classify_location(elevation, coastal_distance);
        let multiplier = scenario.multiplier();

        let predictions = target_years
            .iter()
            .map(|&year| {
                let global_rise = self.global_rise_mm(year) * multiplier;
                let local_rise = global_rise * factor;

                let mut flooding_risk = if elevation > 0.0 {
                    (local_rise / (elevation * 1000.0) * 100.0).min(100.0)
                } else {
                    // At or below sea level: high base risk regardless of rise
                    (80.0 + local_rise / 10.0).min(100.0)
                };
                if coastal_distance > 100.0 {
                    flooding_risk *= 0.5;
                }

                YearPrediction {
                    year,
                    global_rise: round2(global_rise),
                    local_rise: round2(local_rise),
                    elevation,
                    flooding_risk: round2(flooding_risk),
                    vulnerability,
                }
            })
            .collect();

        CityProjection {
            city: city.to_string(),
            predictions,
            city_factor: round2(factor),
            elevation,
            vulnerability,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> SeaLevelProjector {
        SeaLevelProjector::fit().unwrap()
    }

    #[test]
    fn regression_matches_exact_least_squares_solution() {
        let p = projector();
        // Exact normal-equation solutions for the calibration table
        assert!((p.global_rise_mm(2030) - 334.93).abs() < 0.5);
        assert!((p.global_rise_mm(2050) - 446.04).abs() < 0.5);
        assert!((p.global_rise_mm(2100) - 794.39).abs() < 0.5);
    }

    #[test]
    fn fitted_curve_tracks_recent_calibration_points() {
        let p = projector();
        assert!((p.global_rise_mm(2024) - 305.0).abs() < 5.0);
        assert!(p.global_rise_mm(1900) < 15.0);
    }

    #[test]
    fn prediction_is_deterministic_across_fits() {
        let a = projector();
        let b = projector();
        let coords = Coordinates { lat: 40.71, lon: -74.01, elevation: 10.0 };
        let ya = a.predict_any_city("New York", coords, &[2030, 2050, 2100], Scenario::Moderate);
        let yb = b.predict_any_city("New York", coords, &[2030, 2050, 2100], Scenario::Moderate);
        for (pa, pb) in ya.predictions.iter().zip(&yb.predictions) {
            assert_eq!(pa.global_rise, pb.global_rise);
            assert_eq!(pa.local_rise, pb.local_rise);
            assert_eq!(pa.flooding_risk, pb.flooding_risk);
        }
    }

    #[test]
    fn predictions_preserve_input_year_order() {
        let p = projector();
        let coords = Coordinates { lat: 51.51, lon: -0.13, elevation: 11.0 };
        let proj = p.predict_any_city("London", coords, &[2100, 2030, 2050], Scenario::Moderate);
        let years: Vec<i32> = proj.predictions.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2100, 2030, 2050]);
    }

    #[test]
    fn local_rise_scales_global_by_location_factor() {
        let p = projector();
        // Coastal, low elevation: critical tier, factor 1.8
        let coords = Coordinates { lat: 40.71, lon: -74.01, elevation: 3.0 };
        let proj = p.predict_any_city("New York", coords, &[2050], Scenario::Moderate);
        assert_eq!(proj.city_factor, 1.8);
        assert_eq!(proj.vulnerability, VulnerabilityTier::Critical);
        let y = &proj.predictions[0];
        assert!((y.local_rise - y.global_rise * 1.8).abs() < 0.01);
    }

    #[test]
    fn zero_elevation_uses_base_risk_branch() {
        let p = projector();
        let coords = Coordinates { lat: 40.71, lon: -74.01, elevation: 0.0 };
        let proj = p.predict_any_city("Atlantis", coords, &[2050], Scenario::Moderate);
        // 80 + local_rise/10 saturates well past 100 for 2050
        assert_eq!(proj.predictions[0].flooding_risk, 100.0);
        assert_eq!(proj.vulnerability, VulnerabilityTier::Critical);
    }

    #[test]
    fn inland_locations_halve_flooding_risk() {
        let p = projector();
        // Same elevation, one inside a coastal box, one far inland
        let coastal = Coordinates { lat: 40.71, lon: -74.01, elevation: 3.0 };
        let inland = Coordinates { lat: -34.60, lon: -58.38, elevation: 3.0 };
        let near = p.predict_any_city("A", coastal, &[2050], Scenario::Moderate);
        let far = p.predict_any_city("B", inland, &[2050], Scenario::Moderate);
        // Both critical tier (elevation <= 5), identical local rise
        assert_eq!(near.predictions[0].local_rise, far.predictions[0].local_rise);
        assert!((far.predictions[0].flooding_risk - near.predictions[0].flooding_risk / 2.0).abs() < 0.01);
    }

    #[test]
    fn scenario_multipliers_scale_the_baseline() {
        let p = projector();
        let coords = Coordinates { lat: 35.68, lon: 139.69, elevation: 40.0 };
        let base = p.predict_any_city("Tokyo", coords, &[2100], Scenario::Moderate);
        let opt = p.predict_any_city("Tokyo", coords, &[2100], Scenario::Optimistic);
        let pes = p.predict_any_city("Tokyo", coords, &[2100], Scenario::Pessimistic);
        let g = base.predictions[0].global_rise;
        assert!((opt.predictions[0].global_rise - round2(g * 0.85)).abs() < 0.02);
        assert!((pes.predictions[0].global_rise - round2(g * 1.35)).abs() < 0.02);
    }

    #[test]
    fn unknown_scenario_falls_back_to_moderate() {
        assert_eq!(Scenario::parse("optimistic"), Scenario::Optimistic);
        assert_eq!(Scenario::parse("worst-case"), Scenario::Moderate);
        assert_eq!(Scenario::parse(""), Scenario::Moderate);
        assert_eq!(Scenario::parse("worst-case").multiplier(), 1.0);
    }
}
