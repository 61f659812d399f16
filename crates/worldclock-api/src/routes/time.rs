//! Current time lookup endpoint.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tracing::{Span, field, info, instrument, warn};
use uuid::Uuid;

use worldclock_core::error::LookupError;
use worldclock_core::service;
use worldclock_core::snapshot::TimeSnapshot;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /get-time.
#[derive(Debug, Deserialize)]
pub struct TimeQuery {
    /// Country name as typed by the user.
    pub country: Option<String>,
}

/// GET /get-time?country=<name>
///
/// A query string that does not deserialize (a repeated `country`, say) is
/// answered like a missing country.
#[instrument(
    skip(state, query),
    fields(request_id = %Uuid::new_v4(), country = field::Empty)
)]
async fn get_time(
    State(state): State<AppState>,
    query: Result<Query<TimeQuery>, QueryRejection>,
) -> Result<Json<TimeSnapshot>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        warn!(%rejection, "malformed query string");
        ApiError(LookupError::InvalidRequest)
    })?;
    Span::current().record("country", query.country.as_deref().unwrap_or_default());

    let snapshot = service::get_current_time(
        query.country.as_deref(),
        state.lookup.as_ref(),
        state.clock.as_ref(),
    )
    .await?;

    info!(timezone = %snapshot.timezone, "resolved current time");

    Ok(Json(snapshot))
}

/// Returns the router for the time lookup.
pub fn router() -> Router<AppState> {
    Router::new().route("/get-time", get(get_time))
}
