//! Reference city vulnerability table and the elevation/coastal-distance
//! classification cascade.

use serde::{Deserialize, Serialize};

/// Coarse exposure classification for sea level rise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VulnerabilityTier {
    Low,
    Moderate,
    High,
    Critical,
}

/// Classify a location and derive its local rise multiplier. Ordered
/// cascade, first match wins; each tier is an OR of an elevation ceiling
/// and a coastal-distance ceiling.
pub fn classify_location(elevation_m: f64, coastal_distance_km: f64) -> (VulnerabilityTier, f64) {
    if elevation_m <= 5.0 || coastal_distance_km < 10.0 {
        (VulnerabilityTier::Critical, 1.8)
    } else if elevation_m <= 15.0 || coastal_distance_km < 50.0 {
        (VulnerabilityTier::High, 1.5)
    } else if elevation_m <= 30.0 || coastal_distance_km < 100.0 {
        (VulnerabilityTier::Moderate, 1.2)
    } else {
        (VulnerabilityTier::Low, 0.9)
    }
}

/// Reference profile for a well-studied city. Consulted only by the city
/// listing; arbitrary cities are classified dynamically from coordinates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CityProfile {
    pub name: &'static str,
    pub factor: f64,
    pub elevation_m: f64,
    pub vulnerability: VulnerabilityTier,
}

pub const REFERENCE_CITIES: [CityProfile; 12] = [
    CityProfile { name: "Miami", factor: 1.8, elevation_m: 2.0, vulnerability: VulnerabilityTier::Critical },
    CityProfile { name: "Venice", factor: 2.0, elevation_m: 1.0, vulnerability: VulnerabilityTier::Critical },
    CityProfile { name: "Amsterdam", factor: 1.6, elevation_m: -2.0, vulnerability: VulnerabilityTier::Critical },
    CityProfile { name: "Mumbai", factor: 1.5, elevation_m: 14.0, vulnerability: VulnerabilityTier::Critical },
    CityProfile { name: "Shanghai", factor: 1.7, elevation_m: 4.0, vulnerability: VulnerabilityTier::Critical },
    CityProfile { name: "Jakarta", factor: 1.9, elevation_m: 8.0, vulnerability: VulnerabilityTier::Critical },
    CityProfile { name: "Bangkok", factor: 1.7, elevation_m: 1.5, vulnerability: VulnerabilityTier::Critical },
    CityProfile { name: "New York", factor: 1.4, elevation_m: 10.0, vulnerability: VulnerabilityTier::High },
    CityProfile { name: "London", factor: 1.3, elevation_m: 11.0, vulnerability: VulnerabilityTier::High },
    CityProfile { name: "Tokyo", factor: 1.2, elevation_m: 40.0, vulnerability: VulnerabilityTier::Moderate },
    CityProfile { name: "Sydney", factor: 1.1, elevation_m: 58.0, vulnerability: VulnerabilityTier::Moderate },
    CityProfile { name: "Delhi", factor: 1.0, elevation_m: 216.0, vulnerability: VulnerabilityTier::Low },
];

/// Reference city names in lexicographic order.
pub fn available_cities() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REFERENCE_CITIES.iter().map(|c| c.name).collect();
    names.sort_unstable();
    names
}
