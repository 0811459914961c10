//! Query parameter types for the data endpoints.
//!
//! The values are logged but do not filter or scale the generated series.
//! Missing or malformed parameters fall back to their defaults.

use serde::Deserialize;

/// `?date_range=&power_type=&inverter=` on `/api/forecast`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ForecastParams {
    pub date_range: String,
    pub power_type: String,
    pub inverter: String,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            date_range: "all".into(),
            power_type: "AC".into(),
            inverter: "all".into(),
        }
    }
}

/// `?date_range=` on `/api/historical`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoricalParams {
    pub date_range: String,
}

impl Default for HistoricalParams {
    fn default() -> Self {
        Self {
            date_range: "all".into(),
        }
    }
}
