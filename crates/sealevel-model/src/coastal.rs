//! Coarse coastal-distance heuristic.
//!
//! Fixed geographic bounding boxes with an associated distance-to-coast
//! constant; no geodesic computation. Evaluated in listed order, first
//! match wins; points outside every box are treated as far inland.

/// Distance assumed for locations matching no coastal box.
pub const INLAND_DISTANCE_KM: f64 = 200.0;

struct CoastalBox {
    lat: (f64, f64),
    lon: (f64, f64),
    distance_km: f64,
}

/// US east coast, US west coast, western Europe, east Asia, Indian Ocean rim.
const COASTAL_BOXES: [CoastalBox; 5] = [
    CoastalBox { lat: (25.0, 45.0), lon: (-80.0, -70.0), distance_km: 5.0 },
    CoastalBox { lat: (25.0, 50.0), lon: (-125.0, -115.0), distance_km: 5.0 },
    CoastalBox { lat: (35.0, 60.0), lon: (-10.0, 30.0), distance_km: 10.0 },
    CoastalBox { lat: (0.0, 40.0), lon: (100.0, 140.0), distance_km: 10.0 },
    CoastalBox { lat: (-20.0, 25.0), lon: (40.0, 100.0), distance_km: 10.0 },
];

/// Estimate distance to open coastline in km for a lat/lon point.
pub fn estimate_coastal_distance(lat: f64, lon: f64) -> f64 {
    for region in &COASTAL_BOXES {
        if region.lat.0 <= lat && lat <= region.lat.1 && region.lon.0 <= lon && lon <= region.lon.1
        {
            return region.distance_km;
        }
    }
    INLAND_DISTANCE_KM
}
