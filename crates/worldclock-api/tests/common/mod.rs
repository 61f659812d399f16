//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router};
use axum::body::Body;
use axum::extract::Path;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use worldclock_core::clock::SystemClock;
use worldclock_lookup::RestCountriesClient;

use worldclock_api::state::AppState;

/// Stub REST Countries name search. Knows Japan and a country without
/// timezones; everything else is a 404.
async fn stub_search(Path(name): Path<String>) -> Response {
    match name.to_lowercase().as_str() {
        "japan" => Json(json!([{
            "name": { "common": "Japan", "official": "Japan" },
            "timezones": ["Asia/Tokyo"]
        }]))
        .into_response(),
        "antarctica" => Json(json!([{
            "name": { "common": "Antarctica" },
            "timezones": []
        }]))
        .into_response(),
        "outage" => StatusCode::BAD_GATEWAY.into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": 404, "message": "Not Found" })),
        )
            .into_response(),
    }
}

/// Serve the stub lookup service on an ephemeral local port.
pub async fn spawn_stub_lookup() -> SocketAddr {
    let app = Router::new().route("/v3.1/name/{name}", get(stub_search));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Build the full app router wired to the stub lookup service with the
/// real system clock. Uses the same router as `main.rs`.
pub async fn build_test_app() -> Router {
    let addr = spawn_stub_lookup().await;
    let lookup =
        RestCountriesClient::new(&format!("http://{addr}/v3.1"), Duration::from_secs(5)).unwrap();
    let app_state = AppState::new(Arc::new(SystemClock), Arc::new(lookup));

    worldclock_api::app(app_state)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
