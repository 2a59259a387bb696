//! Error type definitions.
//!
//! This module defines all error types used throughout the application, plus the
//! `ErrorKind` classification recorded for failed lookups.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured API base URL cannot be parsed.
    #[error("Invalid API base URL '{url}': {source}")]
    BaseUrlError {
        /// URL as configured
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },
}

/// Configuration problems that prevent any lookup from starting.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// No provider returned an API key.
    #[error(
        "API key not found. Pass --api-key, set WHOISJSON_API_KEY, or add it to {secrets_file}:\n\
         [whoisjson]\n\
         api_key = \"your-api-key-here\""
    )]
    MissingApiKey {
        /// Secrets file that was consulted last
        secrets_file: String,
    },

    /// The secrets file exists but could not be read or parsed.
    #[error("Error loading API key from secrets file {path}: {message}")]
    SecretsFile {
        /// Path of the secrets file
        path: PathBuf,
        /// Read or parse error
        message: String,
    },
}

/// Problems with the user-supplied domain list.
#[derive(Error, Debug)]
pub enum InputError {
    /// The domain list was empty after dropping blanks and comments.
    #[error("Please enter at least one domain")]
    EmptyDomainList,

    /// A single lookup was requested for a blank domain.
    #[error("Please enter a domain name")]
    EmptyDomain,

    /// The domain source could not be read.
    #[error("Failed to read domains from {source_name}: {source}")]
    Read {
        /// File path, or `stdin`
        source_name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single API lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The API answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body as received
        body: String,
    },

    /// The request could not be sent or the response could not be received.
    #[error("Network error: {0}")]
    Network(#[source] ReqwestError),

    /// A 2xx response carried a body that is not valid JSON.
    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl LookupError {
    /// Classifies this error for outcome recording.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::Http { .. } => ErrorKind::HttpError,
            LookupError::Network(_) => ErrorKind::NetworkError,
            LookupError::Decode(_) | LookupError::Other(_) => ErrorKind::Other,
        }
    }

    /// HTTP status code, when the API answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LookupError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message recorded in a failure outcome.
    ///
    /// HTTP failures record the raw response body; everything else records the
    /// rendered error.
    pub fn message(&self) -> String {
        match self {
            LookupError::Http { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

/// Errors writing a JSON export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Creating the directory or writing the file failed.
    #[error("Failed to write export {path}: {source}")]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The payload could not be serialized.
    #[error("Failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Classification of a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
pub enum ErrorKind {
    /// Non-2xx response from the API
    HttpError,
    /// Transport-level failure (timeout, DNS, connection refused)
    NetworkError,
    /// Anything else (decode failures, unexpected errors)
    Other,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Human-readable label used in statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::HttpError => "HTTP error",
            ErrorKind::NetworkError => "Network error",
            ErrorKind::Other => "Other error",
        }
    }
}
