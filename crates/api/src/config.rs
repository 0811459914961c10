use std::path::PathBuf;
use std::time::Duration;

use solarcast_weather::client::{DEFAULT_BASE_URL, DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use solarcast_weather::WeatherConfig;

/// Origin value that switches CORS to allow-any.
pub const WILDCARD_ORIGIN: &str = "*";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A lone `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding `index.html` and `favicon.ico`. When unset the
    /// landing page and favicon routes are not mounted.
    pub static_dir: Option<PathBuf>,
    /// Upstream weather provider settings.
    pub weather: WeatherConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                          |
    /// |--------------------------|--------------------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                                        |
    /// | `PORT`                   | `5000`                                           |
    /// | `CORS_ORIGINS`           | `http://localhost:3000,http://localhost:5000`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                             |
    /// | `STATIC_DIR`             | unset                                            |
    /// | `OPENWEATHERMAP_API_KEY` | unset                                            |
    /// | `OPENWEATHERMAP_URL`     | `https://api.openweathermap.org/data/2.5/forecast` |
    /// | `WEATHER_LAT`            | `28.6139`                                        |
    /// | `WEATHER_LON`            | `77.2090`                                        |
    /// | `WEATHER_TIMEOUT_SECS`   | `5`                                              |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Panics on unparseable values, naming the offending variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = non_empty("PORT")
            .unwrap_or_else(|| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = non_empty("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000,http://localhost:5000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = non_empty("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = non_empty("STATIC_DIR").map(PathBuf::from);

        let latitude: f64 = non_empty("WEATHER_LAT")
            .map(|v| v.parse().expect("WEATHER_LAT must be a valid f64"))
            .unwrap_or(DEFAULT_LATITUDE);

        let longitude: f64 = non_empty("WEATHER_LON")
            .map(|v| v.parse().expect("WEATHER_LON must be a valid f64"))
            .unwrap_or(DEFAULT_LONGITUDE);

        let weather_timeout_secs: u64 = non_empty("WEATHER_TIMEOUT_SECS")
            .unwrap_or_else(|| "5".into())
            .parse()
            .expect("WEATHER_TIMEOUT_SECS must be a valid u64");

        let weather = WeatherConfig {
            base_url: non_empty("OPENWEATHERMAP_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            api_key: non_empty("OPENWEATHERMAP_API_KEY"),
            latitude,
            longitude,
            timeout: Duration::from_secs(weather_timeout_secs),
            ..WeatherConfig::default()
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            weather,
        }
    }

    /// Whether CORS should allow any origin.
    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == WILDCARD_ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "http://localhost:5000"]
        );
        assert!(!config.cors_allows_any());
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.static_dir.is_none());
        assert!(config.weather.api_key.is_none());
        assert_eq!(config.weather.timeout, Duration::from_secs(5));
        assert_eq!(config.weather.latitude, DEFAULT_LATITUDE);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", " https://solar.example.com , http://localhost:3000 ,"),
            ("STATIC_DIR", "/srv/solarcast"),
            ("OPENWEATHERMAP_API_KEY", "abc123"),
            ("WEATHER_LAT", "51.5"),
            ("WEATHER_TIMEOUT_SECS", "2"),
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_origins,
            vec!["https://solar.example.com", "http://localhost:3000"]
        );
        assert_eq!(config.static_dir, Some(PathBuf::from("/srv/solarcast")));
        assert_eq!(config.weather.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.weather.latitude, 51.5);
        assert_eq!(config.weather.longitude, DEFAULT_LONGITUDE);
        assert_eq!(config.weather.timeout, Duration::from_secs(2));
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let config = config_from(&[("OPENWEATHERMAP_API_KEY", "  ")]);
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn wildcard_origin_enables_allow_any() {
        let config = config_from(&[("CORS_ORIGINS", "*")]);
        assert!(config.cors_allows_any());
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn invalid_port_panics() {
        config_from(&[("PORT", "not-a-port")]);
    }
}
