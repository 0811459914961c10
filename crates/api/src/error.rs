use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use solarcast_core::error::CoreError;
use solarcast_weather::{fallback_document, WeatherError};

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce JSON error bodies of the form
/// `{ "error": ... }`. Weather failures additionally carry the fallback
/// `list` structure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A fault raised while generating synthetic data.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The upstream weather provider could not be used.
    #[error("Failed to fetch weather data: {0}")]
    Weather(#[from] WeatherError),

    /// A static asset that does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Any other unexpected fault.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            AppError::Weather(err) => {
                tracing::error!(error = %err, "Error fetching weather data");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(fallback_document(message)),
                )
                    .into_response()
            }
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, axum::Json(json!({ "error": message }))).into_response()
            }
            // Fault text is echoed to the client verbatim.
            AppError::Core(_) | AppError::InternalError(_) => {
                tracing::error!(error = %message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}
