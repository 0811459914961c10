//! Synthetic solar-power forecast and historical series.
//!
//! There is no model behind these numbers: every value is drawn uniformly
//! from a fixed band. The [`DataGenerator`] trait is the seam the HTTP layer
//! depends on, so tests can swap in a deterministic generator.

use chrono::{Duration, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Kilowatts, LocalTimestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of hourly points in both the forecast and the historical series.
pub const HORIZON_HOURS: i64 = 24;

/// Band for simulated power readings (kW).
pub const POWER_MIN_KW: Kilowatts = 400.0;
pub const POWER_MAX_KW: Kilowatts = 600.0;

/// Band for the multiplicative deviation of `actual` from `predicted`.
pub const ACTUAL_FACTOR_MIN: f64 = 0.9;
pub const ACTUAL_FACTOR_MAX: f64 = 1.1;

/// Metric sampling bands.
pub mod metric_bounds {
    pub const MAE: (f64, f64) = (5.0, 15.0);
    pub const RMSE: (f64, f64) = (10.0, 20.0);
    pub const MAPE: (f64, f64) = (1.0, 5.0);
    pub const R2: (f64, f64) = (0.9, 0.99);
}

/// Hour-granularity timestamp layout (minutes and seconds always zero).
pub const HOUR_FORMAT: &str = "%Y-%m-%dT%H:00:00";

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// One simulated hourly forecast reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date_time: String,
    pub predicted: Kilowatts,
    pub actual: Kilowatts,
}

/// Accuracy metrics reported alongside a forecast.
///
/// Sampled independently of the points; they do not describe them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMetrics {
    pub mae: f64,
    pub rmse: f64,
    pub mape: f64,
    pub r2: f64,
}

/// Body of `GET /api/forecast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Ascending by hour, starting at the current hour.
    pub forecast: Vec<ForecastPoint>,
    pub metrics: ForecastMetrics,
}

/// One simulated hourly past reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date_time: String,
    pub actual: Kilowatts,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Render a timestamp at hour granularity, e.g. `2024-05-01T13:00:00`.
pub fn format_hour(ts: LocalTimestamp) -> String {
    ts.format(HOUR_FORMAT).to_string()
}

/// Round to two decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn sample_band<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    rng.random_range(lo..=hi)
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Build a 24-point forward series starting at `now`, plus metrics.
pub fn generate_forecast_at<R: Rng + ?Sized>(
    now: LocalTimestamp,
    rng: &mut R,
) -> ForecastResponse {
    let forecast = (0..HORIZON_HOURS)
        .map(|i| {
            let predicted = sample_band(rng, (POWER_MIN_KW, POWER_MAX_KW));
            let actual = predicted * sample_band(rng, (ACTUAL_FACTOR_MIN, ACTUAL_FACTOR_MAX));
            ForecastPoint {
                date_time: format_hour(now + Duration::hours(i)),
                predicted: round2(predicted),
                actual: round2(actual),
            }
        })
        .collect();

    let metrics = ForecastMetrics {
        mae: sample_band(rng, metric_bounds::MAE),
        rmse: sample_band(rng, metric_bounds::RMSE),
        mape: sample_band(rng, metric_bounds::MAPE),
        r2: sample_band(rng, metric_bounds::R2),
    };

    ForecastResponse { forecast, metrics }
}

/// Build a 24-point backward series: hour -1 first, hour -24 last.
pub fn generate_historical_at<R: Rng + ?Sized>(
    now: LocalTimestamp,
    rng: &mut R,
) -> Vec<HistoricalPoint> {
    (1..=HORIZON_HOURS)
        .map(|i| HistoricalPoint {
            date_time: format_hour(now - Duration::hours(i)),
            actual: round2(sample_band(rng, (POWER_MIN_KW, POWER_MAX_KW))),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// DataGenerator
// ---------------------------------------------------------------------------

/// Source of forecast and historical series for the HTTP handlers.
pub trait DataGenerator: Send + Sync {
    fn generate_forecast(&self) -> Result<ForecastResponse, CoreError>;

    fn generate_historical(&self) -> Result<Vec<HistoricalPoint>, CoreError>;
}

/// Uniform-random generator anchored at the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl DataGenerator for RandomGenerator {
    fn generate_forecast(&self) -> Result<ForecastResponse, CoreError> {
        Ok(generate_forecast_at(Local::now().naive_local(), &mut rand::rng()))
    }

    fn generate_historical(&self) -> Result<Vec<HistoricalPoint>, CoreError> {
        Ok(generate_historical_at(Local::now().naive_local(), &mut rand::rng()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
