//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::api::WhoisJsonClient;
use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the reqwest client used for every API call.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Request timeout only when `timeout_seconds` is set (transport default otherwise)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_http_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

/// Initializes the WhoisJSON API client.
///
/// # Arguments
///
/// * `config` - Base URL, user agent and timeout settings
/// * `api_key` - Token sent in the `Authorization` header
///
/// # Errors
///
/// Returns `InitializationError` if the HTTP client cannot be built or the
/// base URL is invalid.
pub fn init_api_client(
    config: &Config,
    api_key: impl Into<String>,
) -> Result<WhoisJsonClient, InitializationError> {
    let http = init_http_client(config)?;
    WhoisJsonClient::new(http, &config.base_url, api_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_api_client_uses_base_url() {
        let config = Config {
            base_url: "http://127.0.0.1:8080/api/v1".to_string(),
            timeout_seconds: Some(5),
            ..Default::default()
        };
        let client = init_api_client(&config, "key").expect("client should build");
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/api/v1/");
    }

    #[test]
    fn test_init_api_client_rejects_bad_base_url() {
        let config = Config {
            base_url: "::not-a-url::".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            init_api_client(&config, "key"),
            Err(InitializationError::BaseUrlError { .. })
        ));
    }
}
