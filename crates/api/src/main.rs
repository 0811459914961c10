use std::net::SocketAddr;
use std::sync::Arc;

use solarcast_core::forecast::RandomGenerator;
use solarcast_weather::OpenWeatherMapClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solarcast_api::config::ServerConfig;
use solarcast_api::router::build_app_router;
use solarcast_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "solarcast_api=debug,solarcast_weather=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        cors_origins = ?config.cors_origins,
        static_dir = ?config.static_dir,
        "Loaded server configuration"
    );
    if config.weather.api_key.is_none() {
        tracing::warn!("OPENWEATHERMAP_API_KEY is not set; /api/map will return fallback data");
    }

    // --- Weather provider ---
    let weather = OpenWeatherMapClient::new(config.weather.clone())
        .expect("Failed to build weather HTTP client");

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        generator: Arc::new(RandomGenerator::new()),
        weather: Arc::new(weather),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
