//! Sea level and CO2 data endpoints (reference series).

use axum::Json;
use serde_json::{json, Value};

pub async fn current_sea_level() -> Json<Value> {
    Json(json!({
        "status": "success",
        "data": climate_data::sea_level_series(),
    }))
}

pub async fn current_co2() -> Json<Value> {
    Json(json!({
        "status": "success",
        "data": climate_data::co2_series(),
    }))
}
