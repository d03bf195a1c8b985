//! Service banner, status and configuration endpoints.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

pub async fn home() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "🌍 Climate Alert System API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/api/weather/<city>": "Get current weather",
            "/api/sealevel/current": "Get sea level data",
            "/api/climate/co2/current": "Get CO2 data",
            "/api/ml/sealevel/predict/any/<city>": "Predict sea level for any city",
            "/api/risk/assess/<city>": "Assess disaster risks"
        }
    }))
}

pub async fn api_status() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn mapbox_token(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let token = state
        .mapbox_token
        .as_deref()
        .ok_or_else(|| ApiError::internal("Mapbox token not configured"))?;

    Ok(Json(json!({ "status": "success", "token": token })))
}

pub async fn endpoint_not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}
