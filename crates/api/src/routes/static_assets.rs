use axum::routing::get;
use axum::Router;

use crate::handlers::static_assets;
use crate::state::AppState;

/// Mount `/` and `/favicon.ico`, served from the configured static directory.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(static_assets::landing_page))
        .route("/favicon.ico", get(static_assets::favicon))
}
