use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use climate_data::{ElevationApi, WeatherApi};
use sealevel_model::SeaLevelProjector;

mod climate_routes;
mod error;
mod risk_routes;
mod routes;
mod sealevel_routes;
mod weather_routes;

#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherApi,
    pub elevation: ElevationApi,
    pub projector: Arc<SeaLevelProjector>,
    pub mapbox_token: Option<String>,
}

/// Reporting precision for user-facing weather figures.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "climate_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("OPENWEATHER_API_KEY").ok();
    let mapbox_token = std::env::var("MAPBOX_TOKEN").ok();
    if api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set - weather lookups will fail");
    }
    if mapbox_token.is_none() {
        tracing::warn!("MAPBOX_TOKEN not set - /api/mapbox-token will return an error");
    }

    // Eager fit: the regression is deterministic and cheap, so training at
    // startup removes any first-request coordination.
    let projector = SeaLevelProjector::fit().context("fitting sea level regression")?;
    tracing::info!("   Sea level regression fitted");

    let state = AppState {
        weather: WeatherApi::with_api_key(api_key).context("building weather client")?,
        elevation: ElevationApi::new().context("building elevation client")?,
        projector: Arc::new(projector),
        mapbox_token,
    };

    let app = Router::new()
        .route("/", get(routes::home))
        .route("/api/status", get(routes::api_status))
        .route("/api/mapbox-token", get(routes::mapbox_token))
        .route("/api/weather/coords", get(weather_routes::by_coords))
        .route("/api/weather/:city", get(weather_routes::by_city))
        .route("/api/sealevel/current", get(climate_routes::current_sea_level))
        .route("/api/climate/co2/current", get(climate_routes::current_co2))
        .route(
            "/api/ml/sealevel/predict/any/:city",
            get(sealevel_routes::predict_city),
        )
        .route("/api/ml/sealevel/cities", get(sealevel_routes::cities))
        .route("/api/risk/assess/:city", get(risk_routes::assess_city))
        .fallback(routes::endpoint_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{port}");

    tracing::info!("🌍 Climate Alert gateway starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
