use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use solarcast_core::forecast::HistoricalPoint;

use crate::error::AppResult;
use crate::query::HistoricalParams;
use crate::state::AppState;

/// GET /api/historical -- the last 24 hours, most recent first.
pub async fn get_historical(
    State(state): State<AppState>,
    params: Result<Query<HistoricalParams>, QueryRejection>,
) -> AppResult<Json<Vec<HistoricalPoint>>> {
    let params = params.map(|Query(p)| p).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Unparseable historical query, using defaults");
        HistoricalParams::default()
    });

    tracing::info!(date_range = %params.date_range, "Received historical request");

    let data = state.generator.generate_historical()?;

    tracing::info!(points = data.len(), "Historical data generated");
    Ok(Json(data))
}
