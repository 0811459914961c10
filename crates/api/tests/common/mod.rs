#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use solarcast_api::config::ServerConfig;
use solarcast_api::router::build_app_router;
use solarcast_api::state::AppState;
use solarcast_core::error::CoreError;
use solarcast_core::forecast::{
    DataGenerator, ForecastResponse, HistoricalPoint, RandomGenerator,
};
use solarcast_weather::{WeatherConfig, WeatherError, WeatherProvider};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as the only CORS origin and no API key.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        static_dir: None,
        weather: WeatherConfig {
            timeout: Duration::from_millis(500),
            ..WeatherConfig::default()
        },
    }
}

/// Build the production router around the given collaborators.
pub fn build_app_with(
    config: ServerConfig,
    generator: Arc<dyn DataGenerator>,
    weather: Arc<dyn WeatherProvider>,
) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        generator,
        weather,
    };
    build_app_router(state, &config)
}

/// Router with the real random generator and a succeeding weather stub.
pub fn build_test_app() -> Router {
    build_app_with(
        test_config(),
        Arc::new(RandomGenerator::new()),
        Arc::new(StubWeather::Ok(weather_fixture())),
    )
}

/// Issue a GET request against the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// A trimmed-down OpenWeatherMap forecast document.
pub fn weather_fixture() -> Value {
    json!({
        "cod": "200",
        "message": 0,
        "cnt": 2,
        "list": [
            {
                "dt": 1_700_000_000,
                "main": { "temp": 24.3, "humidity": 40 },
                "weather": [{ "id": 800, "main": "Clear", "description": "clear sky" }]
            },
            {
                "dt": 1_700_010_800,
                "main": { "temp": 22.1, "humidity": 45 },
                "weather": [{ "id": 801, "main": "Clouds", "description": "few clouds" }]
            }
        ],
        "city": { "name": "New Delhi", "coord": { "lat": 28.6139, "lon": 77.209 } }
    })
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Weather provider with a canned outcome.
pub enum StubWeather {
    Ok(Value),
    Status(u16),
    MissingKey,
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn fetch_forecast(&self) -> Result<Value, WeatherError> {
        match self {
            StubWeather::Ok(body) => Ok(body.clone()),
            StubWeather::Status(code) => Err(WeatherError::HttpStatus(*code)),
            StubWeather::MissingKey => Err(WeatherError::MissingApiKey),
        }
    }
}

/// Generator that always reports an internal fault.
pub struct FailingGenerator(pub &'static str);

impl DataGenerator for FailingGenerator {
    fn generate_forecast(&self) -> Result<ForecastResponse, CoreError> {
        Err(CoreError::Internal(self.0.to_string()))
    }

    fn generate_historical(&self) -> Result<Vec<HistoricalPoint>, CoreError> {
        Err(CoreError::Internal(self.0.to_string()))
    }
}

/// Generator that panics, to exercise panic recovery.
pub struct PanickingGenerator;

impl DataGenerator for PanickingGenerator {
    fn generate_forecast(&self) -> Result<ForecastResponse, CoreError> {
        panic!("forecast sampler blew up");
    }

    fn generate_historical(&self) -> Result<Vec<HistoricalPoint>, CoreError> {
        panic!("historical sampler blew up");
    }
}

/// Config pointing at a static directory.
pub fn config_with_static_dir(dir: PathBuf) -> ServerConfig {
    ServerConfig {
        static_dir: Some(dir),
        ..test_config()
    }
}
