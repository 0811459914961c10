pub mod health;
pub mod static_assets;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /forecast                 24-hour forecast + metrics (GET)
/// /historical               last 24 hours (GET)
/// /map                      upstream weather relay (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(handlers::forecast::get_forecast))
        .route("/historical", get(handlers::historical::get_historical))
        .route("/map", get(handlers::weather::get_map_data))
}
