use std::sync::Arc;

use solarcast_core::forecast::DataGenerator;
use solarcast_weather::WeatherProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (static directory lookup, etc.).
    pub config: Arc<ServerConfig>,
    /// Source of forecast and historical series.
    pub generator: Arc<dyn DataGenerator>,
    /// Upstream weather provider behind `/api/map`.
    pub weather: Arc<dyn WeatherProvider>,
}
