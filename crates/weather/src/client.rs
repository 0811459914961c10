//! HTTP client for the OpenWeatherMap 5-day forecast endpoint.
//!
//! Issues a single GET for a fixed coordinate pair and relays the JSON body
//! untouched. There is no retry: every failure is reported to the caller.

use std::time::Duration;

use async_trait::async_trait;

/// Default upstream endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Default coordinate (New Delhi).
pub const DEFAULT_LATITUDE: f64 = 28.6139;
pub const DEFAULT_LONGITUDE: f64 = 77.2090;

/// Unit system requested from the provider.
pub const DEFAULT_UNITS: &str = "metric";

/// Upper bound on one upstream round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for upstream weather lookups.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// No API key configured; detected before any network I/O.
    #[error("OPENWEATHERMAP_API_KEY is not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Weather provider returned HTTP {0}")]
    HttpStatus(u16),

    /// The provider answered 2xx but the body was not JSON.
    #[error("Invalid weather response body: {0}")]
    Decode(reqwest::Error),
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// Source of raw weather forecast documents.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the forecast document for the configured location.
    async fn fetch_forecast(&self) -> Result<serde_json::Value, WeatherError>;
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Upstream connection settings.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub units: String,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            units: DEFAULT_UNITS.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ---------------------------------------------------------------------------
// OpenWeatherMapClient
// ---------------------------------------------------------------------------

/// [`WeatherProvider`] backed by the OpenWeatherMap REST API.
pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Build a client whose requests are bounded by `config.timeout`.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapClient {
    async fn fetch_forecast(&self) -> Result<serde_json::Value, WeatherError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(WeatherError::MissingApiKey)?;

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("lat", self.config.latitude.to_string()),
                ("lon", self.config.longitude.to_string()),
                ("appid", api_key.to_string()),
                ("units", self.config.units.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::HttpStatus(status.as_u16()));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(WeatherError::Decode)?;

        tracing::info!(
            lat = self.config.latitude,
            lon = self.config.longitude,
            "Weather data fetched from upstream provider"
        );
        Ok(body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
