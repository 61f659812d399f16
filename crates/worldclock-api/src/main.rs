//! World Clock API server entry point.

use std::error::Error;
use std::sync::Arc;

use worldclock_api::config::ServerConfig;
use worldclock_api::state::AppState;
use worldclock_api::telemetry;
use worldclock_core::clock::SystemClock;
use worldclock_lookup::RestCountriesClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = ServerConfig::from_env()?;

    // Initialize tracing subscriber.
    let tracer_provider = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting World Clock API server");

    // Build application state.
    let lookup = RestCountriesClient::new(&config.lookup_url, config.lookup_timeout)?;
    tracing::info!(lookup_url = %config.lookup_url, "using country lookup service");
    let app_state = AppState::new(Arc::new(SystemClock), Arc::new(lookup));

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, worldclock_api::app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(provider) = tracer_provider {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "failed to flush trace exporter");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
