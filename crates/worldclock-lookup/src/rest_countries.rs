//! REST Countries implementation of the `CountryLookup` trait.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, warn};

use worldclock_core::error::LookupError;
use worldclock_core::lookup::{CountryLookup, CountryRecord};

/// Public REST Countries endpoint.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Only the fields the lookup needs are requested.
const RESPONSE_FIELDS: &str = "name,timezones";

/// Errors building a `RestCountriesClient`.
#[derive(Debug, Error)]
pub enum LookupClientError {
    /// The base URL is not an absolute http(s) URL.
    #[error("invalid lookup base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Country lookup backed by the REST Countries name search.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: Client,
    base_url: Url,
}

impl RestCountriesClient {
    /// Creates a client for the service rooted at `base_url`, giving up on
    /// any single request after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `LookupClientError::InvalidBaseUrl` if `base_url` is not an
    /// http(s) URL, or `LookupClientError::Client` if the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupClientError> {
        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base())
            .ok_or_else(|| LookupClientError::InvalidBaseUrl(base_url.to_owned()))?;

        let client = Client::builder()
            .user_agent(concat!("worldclock/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base}/name/{name}?fields=name,timezones`, with `name` percent-encoded
    /// as a single path segment.
    fn search_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("name").push(name);
        }
        url.query_pairs_mut().append_pair("fields", RESPONSE_FIELDS);
        url
    }
}

#[async_trait]
impl CountryLookup for RestCountriesClient {
    async fn search_by_name(&self, name: &str) -> Result<Vec<CountryRecord>, LookupError> {
        let url = self.search_url(name);
        debug!(%url, "searching country by name");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "country lookup request failed");
            LookupError::UpstreamFailure(format!("request to {url} failed: {e}"))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "no country matched");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            warn!(%url, %status, "country lookup returned an error status");
            return Err(LookupError::UpstreamFailure(format!(
                "{url} returned {status}"
            )));
        }

        response.json::<Vec<CountryRecord>>().await.map_err(|e| {
            warn!(%url, error = %e, "country lookup returned a malformed body");
            LookupError::UpstreamFailure(format!("malformed response from {url}: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> RestCountriesClient {
        RestCountriesClient::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_search_url_appends_name_and_fields() {
        let url = client("https://restcountries.com/v3.1").search_url("Japan");

        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/name/Japan?fields=name%2Ctimezones"
        );
    }

    #[test]
    fn test_search_url_tolerates_trailing_slash_and_encodes_name() {
        let url = client("http://localhost:8080/v3.1/").search_url("South Africa/x");

        assert_eq!(url.path(), "/v3.1/name/South%20Africa%2Fx");
    }

    #[test]
    fn test_new_rejects_non_http_base_url() {
        let result = RestCountriesClient::new("mailto:someone@example.com", Duration::from_secs(1));

        assert!(matches!(result, Err(LookupClientError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_new_rejects_relative_base_url() {
        let result = RestCountriesClient::new("v3.1/name", Duration::from_secs(1));

        assert!(matches!(result, Err(LookupClientError::InvalidBaseUrl(_))));
    }
}
