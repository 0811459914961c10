use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use solarcast_core::forecast::ForecastResponse;

use crate::error::AppResult;
use crate::query::ForecastParams;
use crate::state::AppState;

/// GET /api/forecast -- 24-hour forward series plus accuracy metrics.
///
/// Query parameters are logged only; they never change the output.
pub async fn get_forecast(
    State(state): State<AppState>,
    params: Result<Query<ForecastParams>, QueryRejection>,
) -> AppResult<Json<ForecastResponse>> {
    let params = params.map(|Query(p)| p).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Unparseable forecast query, using defaults");
        ForecastParams::default()
    });

    tracing::info!(
        date_range = %params.date_range,
        power_type = %params.power_type,
        inverter = %params.inverter,
        "Received forecast request"
    );

    let data = state.generator.generate_forecast()?;

    tracing::info!(points = data.forecast.len(), "Forecast data generated");
    Ok(Json(data))
}
