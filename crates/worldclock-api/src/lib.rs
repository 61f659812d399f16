//! World Clock API — HTTP server library.
//!
//! Exposes `GET /get-time` and `GET /health` over axum. The binary in
//! `main.rs` wires configuration, telemetry and the REST Countries lookup
//! into [`app`].

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

/// Builds the full application router.
///
/// Cross-origin requests are accepted from any origin.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::time::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
