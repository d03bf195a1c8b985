//! Open-Meteo elevation lookup (free, no API key).

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

#[derive(Debug, Error)]
pub enum ElevationError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("elevation API returned status {0}")]
    ApiStatus(u16),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("no elevation value in response")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    elevation: Vec<f64>,
}

/// Open-Meteo elevation client.
#[derive(Clone)]
pub struct ElevationApi {
    client: reqwest::Client,
    base_url: String,
}

impl ElevationApi {
    pub fn new() -> Result<Self, ElevationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| ElevationError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Elevation in meters for a lat/lon point.
    pub async fn fetch(&self, lat: f64, lon: f64) -> Result<f64, ElevationError> {
        let url = format!(
            "{}/elevation?latitude={:.6}&longitude={:.6}",
            self.base_url, lat, lon
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ElevationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ElevationError::ApiStatus(status.as_u16()));
        }

        let data: ElevationResponse = response
            .json()
            .await
            .map_err(|e| ElevationError::Parse(e.to_string()))?;

        data.elevation.first().copied().ok_or(ElevationError::Empty)
    }
}
