//! Landing page and favicon served from the configured static directory.

use std::path::Path;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub const INDEX_FILE: &str = "index.html";
pub const FAVICON_FILE: &str = "favicon.ico";
pub const FAVICON_CONTENT_TYPE: &str = "image/vnd.microsoft.icon";

fn static_dir(state: &AppState) -> Option<&Path> {
    state.config.static_dir.as_deref()
}

fn favicon_not_found() -> AppError {
    AppError::NotFound("Favicon not found".into())
}

/// GET / -- the bundled landing page.
///
/// Without a configured static directory this is a 500, like any other
/// failure to produce the page.
pub async fn landing_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let path = static_dir(&state)
        .ok_or_else(|| AppError::InternalError("static directory is not configured".into()))?
        .join(INDEX_FILE);
    let page = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| AppError::InternalError(format!("{}: {e}", path.display())))?;
    Ok(Html(page))
}

/// GET /favicon.ico -- 404 whenever the asset is absent.
pub async fn favicon(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let path = static_dir(&state).ok_or_else(favicon_not_found)?.join(FAVICON_FILE);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(CONTENT_TYPE, FAVICON_CONTENT_TYPE)], bytes)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Favicon not readable");
            Err(favicon_not_found())
        }
    }
}
