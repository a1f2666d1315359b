//! Open-Meteo forecast client.
//!
//! Free endpoint, no API key. Only the current temperature (Fahrenheit) and
//! WMO weather code are requested.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{RepsError, Result};
use crate::weather::{Coordinates, Weather, WeatherCondition, WeatherSource};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Forecast API client.
#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    weather_code: i64,
}

impl WeatherClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom host (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current conditions at `coords`.
    ///
    /// # Errors
    ///
    /// Returns `RepsError::Weather` on transport failure, a non-success
    /// status, or a body without `current.temperature_2m` and
    /// `current.weather_code`.
    pub async fn current(&self, coords: Coordinates) -> Result<Weather> {
        let url = format!("{}/v1/forecast", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current", "temperature_2m,weather_code".to_string()),
                ("temperature_unit", "fahrenheit".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepsError::Weather(format!(
                "Forecast request failed with status {}",
                status
            )));
        }

        let body: ForecastResponse = response.json().await?;
        let current = body.current.ok_or_else(|| {
            RepsError::Weather("Forecast response has no current conditions".to_string())
        })?;

        Ok(Weather {
            temperature: current.temperature_2m,
            condition: WeatherCondition::from_wmo_code(current.weather_code),
        })
    }
}

impl WeatherSource for WeatherClient {
    fn fetch(&self, coords: Coordinates) -> impl Future<Output = Result<Weather>> + Send {
        self.current(coords)
    }
}
