//! Domain error types.

use thiserror::Error;

/// Message returned when no country name was supplied.
pub const INVALID_REQUEST_MESSAGE: &str = "Please enter a country name.";

/// Message returned when the country or its timezone could not be found.
pub const NOT_FOUND_MESSAGE: &str = "Timezone not found for this country.";

/// Message returned for any failure of the external lookup.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error fetching timezone. Please try again.";

/// Failure of a time lookup. Every variant is terminal for the request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The country name was missing or blank.
    #[error("invalid request: country name is required")]
    InvalidRequest,

    /// No matching country, or the country carries no timezone data.
    #[error("not found: no timezone for country")]
    NotFound,

    /// The external lookup failed or answered with something unusable.
    #[error("upstream failure: {0}")]
    UpstreamFailure(String),
}

impl LookupError {
    /// The caller-facing message. Never includes the upstream cause.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidRequest => INVALID_REQUEST_MESSAGE,
            Self::NotFound => NOT_FOUND_MESSAGE,
            Self::UpstreamFailure(_) => UPSTREAM_FAILURE_MESSAGE,
        }
    }
}
