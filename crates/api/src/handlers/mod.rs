//! Request handlers.
//!
//! Each submodule provides the async handler functions for one endpoint
//! group. Handlers delegate to the injected generator or weather provider
//! in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod forecast;
pub mod historical;
pub mod static_assets;
pub mod weather;
