//! Solarcast domain layer.
//!
//! Holds the forecast/historical data model and the synthetic data
//! generators. Nothing in here performs I/O, so both the HTTP layer and
//! tests can drive it directly.

pub mod error;
pub mod forecast;
pub mod types;
