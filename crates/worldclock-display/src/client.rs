//! HTTP client for the world clock server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use worldclock_core::error::UPSTREAM_FAILURE_MESSAGE;
use worldclock_core::snapshot::TimeSnapshot;

/// Errors talking to the world clock server.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The configured server URL is not an absolute http(s) URL.
    #[error("invalid server URL '{0}'")]
    InvalidServerUrl(String),

    /// The server answered with an error status and message.
    #[error("server rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// The server's `error` message.
        message: String,
    },

    /// The server could not be reached or answered with something unusable.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ClientError {
    /// The message to show the user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message,
            Self::InvalidServerUrl(_) | Self::Transport(_) => UPSTREAM_FAILURE_MESSAGE,
        }
    }
}

/// Source of current-time snapshots for a country.
#[async_trait]
pub trait TimeSource: Send + Sync {
    /// Fetch the current time in `country`.
    async fn fetch_time(&self, country: &str) -> Result<TimeSnapshot, ClientError>;
}

#[derive(Deserialize)]
struct ServerErrorBody {
    error: String,
}

/// `TimeSource` backed by `GET /get-time` on a world clock server.
#[derive(Debug, Clone)]
pub struct TimeServerClient {
    client: Client,
    endpoint: Url,
}

impl TimeServerClient {
    /// Creates a client for the server at `server_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidServerUrl` if `server_url` is not an
    /// http(s) URL, or `ClientError::Transport` if the HTTP client cannot be
    /// built.
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let invalid = || ClientError::InvalidServerUrl(server_url.to_owned());
        let mut endpoint = Url::parse(server_url).map_err(|_| invalid())?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(invalid());
        }
        endpoint
            .path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .push("get-time");

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// The full `/get-time` URL requests go to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TimeSource for TimeServerClient {
    async fn fetch_time(&self, country: &str) -> Result<TimeSnapshot, ClientError> {
        debug!(endpoint = %self.endpoint, country, "requesting current time");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("country", country)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "time server unreachable");
                ClientError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ServerErrorBody>().await.map_err(|e| {
                ClientError::Transport(format!("unexpected {status} response: {e}"))
            })?;
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: body.error,
            });
        }

        response
            .json::<TimeSnapshot>()
            .await
            .map_err(|e| ClientError::Transport(format!("malformed response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_get_time() {
        let client = TimeServerClient::new("http://localhost:3000", Duration::from_secs(1)).unwrap();

        assert_eq!(client.endpoint().as_str(), "http://localhost:3000/get-time");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client =
            TimeServerClient::new("https://clock.example.com/api/", Duration::from_secs(1)).unwrap();

        assert_eq!(
            client.endpoint().as_str(),
            "https://clock.example.com/api/get-time"
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert_eq!(
            TimeServerClient::new("ftp://example.com", Duration::from_secs(1)).unwrap_err(),
            ClientError::InvalidServerUrl("ftp://example.com".into())
        );
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let rejected = ClientError::Rejected {
            status: 404,
            message: "Timezone not found for this country.".into(),
        };
        let transport = ClientError::Transport("connection refused".into());

        assert_eq!(rejected.user_message(), "Timezone not found for this country.");
        assert_eq!(
            transport.user_message(),
            "Error fetching timezone. Please try again."
        );
    }
}
