//! Current-weather lookup.
//!
//! One blocking GET per call, no retries and no caching. The outcome is
//! decided once here: either a temperature in °C or the failure exactly as
//! the service (or the transport) reported it.

use std::fmt;
use std::time::Duration;

use log::{info, warn};
use serde::Deserialize;

use crate::config::DashboardConfig;

/// Result of asking for the current temperature of a city.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentReading {
    /// Degrees Celsius.
    Temperature(f64),
    FetchError(FetchError),
}

/// A failed lookup, kept as reported so it can be shown unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
    /// HTTP status, `None` when no response arrived.
    pub status: Option<u16>,
    /// The service's `message` field, when the body had one.
    pub message: Option<String>,
    /// Raw response body, or the transport error text.
    pub payload: String,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {status}: {}", self.payload),
            None => write!(f, "request failed: {}", self.payload),
        }
    }
}

impl FetchError {
    fn transport(err: impl fmt::Display) -> Self {
        Self {
            status: None,
            message: None,
            payload: err.to_string(),
        }
    }
}

/// Anything that can report the current temperature of a city.
pub trait TemperatureSource {
    fn current_temperature(&self, city: &str, api_key: &str) -> CurrentReading;
}

// ---------------------------------------------------------------------------
// OpenWeatherMap client
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// OpenWeatherMap "current weather" client.
#[derive(Debug, Clone)]
pub struct OpenWeatherMap {
    endpoint: String,
    units: String,
    lang: String,
    timeout: Option<Duration>,
}

impl OpenWeatherMap {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            units: config.units.clone(),
            lang: config.lang.clone(),
            timeout: config.request_timeout,
        }
    }

    /// Fetch the current temperature (blocking)
    pub fn fetch_blocking(&self, city: &str, api_key: &str) -> CurrentReading {
        let client = match reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
        {
            Ok(client) => client,
            Err(e) => return CurrentReading::FetchError(FetchError::transport(e)),
        };

        let response = client
            .get(&self.endpoint)
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .send();

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!("weather request for {city} failed: {e}");
                return CurrentReading::FetchError(FetchError::transport(e));
            }
        };

        let status = response.status().as_u16();
        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                warn!("reading weather response for {city} failed: {e}");
                return CurrentReading::FetchError(FetchError {
                    status: Some(status),
                    message: None,
                    payload: e.to_string(),
                });
            }
        };

        let reading = parse_response(status, &body);
        match &reading {
            CurrentReading::Temperature(t) => info!("current temperature in {city}: {t}°C"),
            CurrentReading::FetchError(e) => warn!("weather lookup for {city} rejected: {e}"),
        }
        reading
    }
}

impl TemperatureSource for OpenWeatherMap {
    fn current_temperature(&self, city: &str, api_key: &str) -> CurrentReading {
        self.fetch_blocking(city, api_key)
    }
}

/// Classify a response: status 200 with a numeric `main.temp` is a reading,
/// anything else is a [`FetchError`] carrying the body untouched.
pub fn parse_response(status: u16, body: &str) -> CurrentReading {
    if status == 200 {
        if let Ok(parsed) = serde_json::from_str::<WeatherResponse>(body) {
            return CurrentReading::Temperature(parsed.main.temp);
        }
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    CurrentReading::FetchError(FetchError {
        status: Some(status),
        message,
        payload: body.to_string(),
    })
}
