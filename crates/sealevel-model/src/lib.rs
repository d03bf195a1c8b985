//! Sea level rise projection.
//!
//! A degree-2 polynomial regression fitted over a fixed 1900-2024 global
//! calibration table, scaled per location by a climate scenario multiplier
//! and a vulnerability factor derived from elevation and a coarse
//! coastal-distance heuristic.

use thiserror::Error;

pub mod cities;
pub mod coastal;
pub mod projector;
pub mod regression;

pub use cities::{available_cities, classify_location, CityProfile, VulnerabilityTier, REFERENCE_CITIES};
pub use coastal::{estimate_coastal_distance, INLAND_DISTANCE_KM};
pub use projector::{CityProjection, Coordinates, Scenario, SeaLevelProjector, YearPrediction};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("need at least 3 calibration points, got {0}")]
    InsufficientData(usize),
    #[error("least-squares fit failed: {0}")]
    Fit(String),
}
