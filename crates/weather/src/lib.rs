//! Client for the upstream weather provider.
//!
//! [`WeatherProvider`] is the seam used by the HTTP layer; the production
//! implementation is [`OpenWeatherMapClient`]. Failures are turned into a
//! [`fallback_document`] by the caller so downstream consumers can always
//! read `list[0].weather[0].description`.

pub mod client;
pub mod fallback;

pub use client::{OpenWeatherMapClient, WeatherConfig, WeatherError, WeatherProvider};
pub use fallback::{fallback_document, UNAVAILABLE_DESCRIPTION};
