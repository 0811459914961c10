use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/map -- relay the upstream weather forecast verbatim.
///
/// Any failure (missing key, network, non-2xx, bad body) becomes a 500
/// with the fallback document; see [`AppError::Weather`](crate::error::AppError::Weather).
pub async fn get_map_data(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let data = state.weather.fetch_forecast().await?;
    Ok(Json(data))
}
