//! Upstream data sources for the climate gateway.
//!
//! - OpenWeatherMap current weather (by city name or coordinates)
//! - Open-Meteo elevation lookup
//! - reference sea level / CO2 series for the data endpoints
//!
//! Failures here surface as typed errors; the scoring crates never see
//! them and accept default inputs instead.

pub mod elevation;
pub mod series;
pub mod weather;

pub use elevation::{ElevationApi, ElevationError};
pub use series::{co2_series, sea_level_series, Co2Series, SeaLevelSeries};
pub use weather::{CurrentConditions, WeatherApi, WeatherApiConfig, WeatherError};
