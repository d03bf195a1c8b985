//! Sea level projection endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use sealevel_model::{available_cities, Coordinates, Scenario};

use crate::error::ApiError;
use crate::{round1, AppState};

const DEFAULT_TARGET_YEARS: &str = "2030,2050,2100";
const DEFAULT_ELEVATION_M: f64 = 50.0;

#[derive(Deserialize)]
pub struct PredictQuery {
    pub scenario: Option<String>,
    pub years: Option<String>,
}

fn parse_years(raw: &str) -> Result<Vec<i32>, ApiError> {
    raw.split(',')
        .map(|y| y.trim().parse::<i32>())
        .collect::<Result<Vec<i32>, _>>()
        .map_err(|_| ApiError::bad_request(format!("Invalid years parameter: {raw}")))
}

/// Project sea level rise for any city. The city resolves to coordinates
/// via the weather provider; elevation comes from Open-Meteo, falling
/// back to a default when the lookup fails.
pub async fn predict_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Query(query): Query<PredictQuery>,
) -> Result<Json<Value>, ApiError> {
    let scenario = Scenario::parse(query.scenario.as_deref().unwrap_or("moderate"));
    let target_years = parse_years(query.years.as_deref().unwrap_or(DEFAULT_TARGET_YEARS))?;

    let weather = state.weather.fetch_by_city(&city).await?;

    let elevation = match state.elevation.fetch(weather.lat, weather.lon).await {
        Ok(meters) => round1(meters),
        Err(err) => {
            tracing::debug!("elevation lookup failed for {city}: {err}");
            DEFAULT_ELEVATION_M
        }
    };

    let coords = Coordinates {
        lat: weather.lat,
        lon: weather.lon,
        elevation,
    };
    let projection = state
        .projector
        .predict_any_city(&weather.city, coords, &target_years, scenario);

    Ok(Json(json!({ "status": "success", "data": projection })))
}

/// Names of the reference cities with curated vulnerability profiles.
pub async fn cities() -> Json<Value> {
    let cities = available_cities();
    Json(json!({
        "status": "success",
        "cities": cities,
        "count": cities.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_years() {
        assert_eq!(parse_years("2030,2050,2100").unwrap(), vec![2030, 2050, 2100]);
        assert_eq!(parse_years(" 2040 , 2060 ").unwrap(), vec![2040, 2060]);
    }

    #[test]
    fn rejects_non_numeric_years() {
        assert!(parse_years("2030,soon").is_err());
        assert!(parse_years("").is_err());
    }
}
