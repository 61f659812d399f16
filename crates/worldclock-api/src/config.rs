//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use worldclock_lookup::rest_countries::DEFAULT_BASE_URL;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Base URL of the country-data service.
    pub lookup_url: String,
    /// Timeout for a single country lookup.
    pub lookup_timeout: Duration,
    /// OTLP collector endpoint; traces are exported only when set.
    pub otlp_endpoint: Option<String>,
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `var`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let lookup_url = var("COUNTRY_LOOKUP_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = match var("COUNTRY_LOOKUP_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "COUNTRY_LOOKUP_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_LOOKUP_TIMEOUT_SECS,
        };
        let otlp_endpoint = var("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty());

        Ok(Self {
            host,
            port,
            lookup_url,
            lookup_timeout: Duration::from_secs(timeout_secs),
            otlp_endpoint,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.lookup_url, "https://restcountries.com/v3.1");
        assert_eq!(config.lookup_timeout, Duration::from_secs(10));
        assert_eq!(config.otlp_endpoint, None);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("COUNTRY_LOOKUP_URL", "http://localhost:9000/v3.1"),
            ("COUNTRY_LOOKUP_TIMEOUT_SECS", "3"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.lookup_url, "http://localhost:9000/v3.1");
        assert_eq!(config.lookup_timeout, Duration::from_secs(3));
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        assert!(matches!(
            config_from(&[("PORT", "seventy")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_zero_timeout_is_config_error() {
        assert!(matches!(
            config_from(&[("COUNTRY_LOOKUP_TIMEOUT_SECS", "0")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_host_fails_socket_addr() {
        let config = config_from(&[("HOST", "not a host")]).unwrap();

        assert!(matches!(config.socket_addr(), Err(AppError::Config(_))));
    }
}
