//! OpenWeatherMap current-weather client.
//!
//! Lookups by city name or by coordinates, with a short TTL response
//! cache so repeated assessments of the same city within a few minutes
//! do not re-hit the provider.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Weather client configuration.
#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Cache TTL in seconds
    pub cache_ttl_sec: u64,
    /// Request timeout in seconds
    pub timeout_sec: u64,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl_sec: 300,
            timeout_sec: 10,
        }
    }
}

/// Current conditions for a resolved city.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub city: String,
    pub country: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub description: String,
    pub icon: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed_ms: f64,
    pub visibility_m: Option<f64>,
    pub sunrise_unix: i64,
    pub sunset_unix: i64,
    pub rain_1h_mm: Option<f64>,
}

impl CurrentConditions {
    /// 24h rainfall proxy extrapolated from the provider's last-hour
    /// figure. `None` when the provider reported no rain block; callers
    /// choose their own fallback.
    pub fn rainfall_24h_estimate(&self) -> Option<f64> {
        self.rain_1h_mm.map(|mm| mm * 24.0)
    }
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather API key not configured")]
    MissingApiKey,
    #[error("city \"{0}\" not found")]
    CityNotFound(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("weather API returned status {0}")]
    ApiStatus(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

struct CacheEntry {
    conditions: CurrentConditions,
    expires_at: Instant,
}

/// OpenWeatherMap client with TTL cache.
#[derive(Clone)]
pub struct WeatherApi {
    config: Arc<WeatherApiConfig>,
    client: reqwest::Client,
    cache: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl WeatherApi {
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            client,
            cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Client with just an API key and default settings.
    pub fn with_api_key(api_key: Option<String>) -> Result<Self, WeatherError> {
        Self::new(WeatherApiConfig {
            api_key,
            ..WeatherApiConfig::default()
        })
    }

    fn api_key(&self) -> Result<&str, WeatherError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingApiKey)
    }

    /// Current weather by city name.
    pub async fn fetch_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let key = format!("city:{}", city.to_lowercase());
        if let Some(hit) = self.cache_get(&key).await {
            return Ok(hit);
        }

        let url = format!("{}/weather", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key()?), ("units", "metric")])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let conditions = Self::decode(response, Some(city)).await?;
        self.cache_put(key, conditions.clone()).await;
        Ok(conditions)
    }

    /// Current weather by coordinates.
    pub async fn fetch_by_coords(&self, lat: f64, lon: f64) -> Result<CurrentConditions, WeatherError> {
        let key = format!("coords:{lat:.2},{lon:.2}");
        if let Some(hit) = self.cache_get(&key).await {
            return Ok(hit);
        }

        let url = format!("{}/weather", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key()?.to_string()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let conditions = Self::decode(response, None).await?;
        self.cache_put(key, conditions.clone()).await;
        Ok(conditions)
    }

    async fn decode(
        response: reqwest::Response,
        city: Option<&str>,
    ) -> Result<CurrentConditions, WeatherError> {
        let status = response.status();
        if status.as_u16() == 404 {
            return Err(WeatherError::CityNotFound(
                city.unwrap_or("<coords>").to_string(),
            ));
        }
        if !status.is_success() {
            return Err(WeatherError::ApiStatus(status.as_u16()));
        }

        let data: OwmResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;
        Ok(data.into())
    }

    async fn cache_get(&self, key: &str) -> Option<CurrentConditions> {
        let cache = self.cache.read().await;
        cache
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.conditions.clone())
    }

    async fn cache_put(&self, key: String, conditions: CurrentConditions) {
        let mut cache = self.cache.write().await;
        cache.insert(
            key,
            CacheEntry {
                conditions,
                expires_at: Instant::now() + Duration::from_secs(self.config.cache_ttl_sec),
            },
        );
    }
}

// ---- OpenWeatherMap response structure ----

#[derive(Debug, Deserialize)]
struct OwmResponse {
    name: String,
    coord: OwmCoord,
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: OwmWind,
    #[serde(default)]
    visibility: Option<f64>,
    sys: OwmSys,
    #[serde(default)]
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmSys {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl From<OwmResponse> for CurrentConditions {
    fn from(data: OwmResponse) -> Self {
        let (description, icon) = data
            .weather
            .first()
            .map(|w| (capitalize(&w.description), w.icon.clone()))
            .unwrap_or_default();

        CurrentConditions {
            city: data.name,
            country: data.sys.country,
            lat: data.coord.lat,
            lon: data.coord.lon,
            description,
            icon,
            temperature_c: data.main.temp,
            feels_like_c: data.main.feels_like,
            temp_min_c: data.main.temp_min,
            temp_max_c: data.main.temp_max,
            humidity_pct: data.main.humidity,
            pressure_hpa: data.main.pressure,
            wind_speed_ms: data.wind.speed,
            visibility_m: data.visibility,
            sunrise_unix: data.sys.sunrise,
            sunset_unix: data.sys.sunset,
            rain_1h_mm: data.rain.and_then(|r| r.one_hour),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "coord": {"lon": 106.8451, "lat": -6.2146},
        "weather": [{"id": 501, "main": "Rain", "description": "moderate rain", "icon": "10d"}],
        "main": {"temp": 29.3, "feels_like": 34.1, "temp_min": 28.0, "temp_max": 30.5,
                 "pressure": 1009, "humidity": 78},
        "visibility": 8000,
        "wind": {"speed": 3.6},
        "rain": {"1h": 2.5},
        "sys": {"country": "ID", "sunrise": 1727558100, "sunset": 1727601600},
        "name": "Jakarta"
    }"#;

    #[test]
    fn parses_provider_response() {
        let data: OwmResponse = serde_json::from_str(SAMPLE).unwrap();
        let conditions: CurrentConditions = data.into();
        assert_eq!(conditions.city, "Jakarta");
        assert_eq!(conditions.country.as_deref(), Some("ID"));
        assert_eq!(conditions.description, "Moderate rain");
        assert_eq!(conditions.icon, "10d");
        assert_eq!(conditions.humidity_pct, 78.0);
        assert_eq!(conditions.visibility_m, Some(8000.0));
        assert_eq!(conditions.rain_1h_mm, Some(2.5));
    }

    #[test]
    fn rainfall_proxy_extrapolates_last_hour() {
        let data: OwmResponse = serde_json::from_str(SAMPLE).unwrap();
        let conditions: CurrentConditions = data.into();
        assert_eq!(conditions.rainfall_24h_estimate(), Some(60.0));
    }

    #[test]
    fn missing_rain_block_yields_no_proxy() {
        let dry = SAMPLE.replace(r#""rain": {"1h": 2.5},"#, "");
        let data: OwmResponse = serde_json::from_str(&dry).unwrap();
        let conditions: CurrentConditions = data.into();
        assert_eq!(conditions.rain_1h_mm, None);
        assert_eq!(conditions.rainfall_24h_estimate(), None);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let api = WeatherApi::with_api_key(None).unwrap();
        assert!(matches!(api.api_key(), Err(WeatherError::MissingApiKey)));
    }
}
