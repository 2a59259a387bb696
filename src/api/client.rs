//! WhoisJSON HTTP client.
//!
//! One GET per lookup, `Authorization: Token=<key>` on every request, JSON
//! body on 2xx and `LookupError::Http` otherwise. No retries, no caching.

use async_trait::async_trait;
use log::debug;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use url::Url;

use super::types::{LookupRequest, Operation, RecordType};
use crate::config::{DOMAIN_PARAM, NSLOOKUP_PATH, RECORD_TYPE_PARAM, SSL_PATH, WHOIS_PATH};
use crate::error_handling::{InitializationError, LookupError};

/// Lookup operations offered by the API.
///
/// The batch orchestrator is written against this trait so it can be driven by
/// any implementation, not only the HTTP client.
#[async_trait]
pub trait LookupApi: Send + Sync {
    /// Domain registration metadata.
    async fn whois(&self, domain: &str) -> Result<Value, LookupError>;

    /// DNS records. `None` or `Some(RecordType::All)` queries all records.
    async fn nslookup(
        &self,
        domain: &str,
        record_type: Option<RecordType>,
    ) -> Result<Value, LookupError>;

    /// SSL certificate details.
    async fn ssl_cert_check(&self, domain: &str) -> Result<Value, LookupError>;

    /// Dispatches a request to the matching operation.
    async fn lookup(&self, request: &LookupRequest) -> Result<Value, LookupError> {
        match request.operation() {
            Operation::Whois => self.whois(request.domain()).await,
            Operation::Dns => self.nslookup(request.domain(), request.record_type()).await,
            Operation::Ssl => self.ssl_cert_check(request.domain()).await,
        }
    }
}

/// HTTP client for the WhoisJSON API.
#[derive(Debug, Clone)]
pub struct WhoisJsonClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

impl WhoisJsonClient {
    /// Creates a client for `base_url` authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::BaseUrlError` if `base_url` is not a valid URL.
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        token: impl Into<String>,
    ) -> Result<Self, InitializationError> {
        // Url::join replaces the last segment unless the base ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|source| InitializationError::BaseUrlError {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// Base URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, LookupError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| LookupError::Other(format!("Invalid endpoint URL: {e}")))?;
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Token={}", self.token))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            debug!("{} answered {}", path, status);
            return Err(LookupError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl LookupApi for WhoisJsonClient {
    async fn whois(&self, domain: &str) -> Result<Value, LookupError> {
        self.get_json(WHOIS_PATH, &[(DOMAIN_PARAM, domain)]).await
    }

    async fn nslookup(
        &self,
        domain: &str,
        record_type: Option<RecordType>,
    ) -> Result<Value, LookupError> {
        let mut query = vec![(DOMAIN_PARAM, domain)];
        if let Some(value) = record_type.and_then(|rt| rt.query_value()) {
            query.push((RECORD_TYPE_PARAM, value));
        }
        self.get_json(NSLOOKUP_PATH, &query).await
    }

    async fn ssl_cert_check(&self, domain: &str) -> Result<Value, LookupError> {
        self.get_json(SSL_PATH, &[(DOMAIN_PARAM, domain)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client =
            WhoisJsonClient::new(reqwest::Client::new(), "https://whoisjson.com/api/v1", "k")
                .expect("valid base url");
        assert_eq!(client.base_url().as_str(), "https://whoisjson.com/api/v1/");
        assert_eq!(
            client.base_url().join(WHOIS_PATH).unwrap().as_str(),
            "https://whoisjson.com/api/v1/whois"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = WhoisJsonClient::new(reqwest::Client::new(), "not a url", "k")
            .expect_err("should reject");
        assert!(matches!(err, InitializationError::BaseUrlError { .. }));
    }
}
