//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the
//! WhoisJSON endpoints, environment variable names and secrets file defaults.

/// Base URL of the WhoisJSON API (all endpoint paths are relative to it).
pub const DEFAULT_BASE_URL: &str = "https://whoisjson.com/api/v1";

/// WHOIS endpoint path, relative to the base URL.
pub const WHOIS_PATH: &str = "whois";
/// DNS lookup endpoint path, relative to the base URL.
pub const NSLOOKUP_PATH: &str = "nslookup";
/// SSL certificate endpoint path, relative to the base URL.
pub const SSL_PATH: &str = "ssl";

/// Query parameter carrying the domain on every endpoint.
pub const DOMAIN_PARAM: &str = "domain";
/// Query parameter carrying the DNS record type (nslookup only).
pub const RECORD_TYPE_PARAM: &str = "type";

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "WHOISJSON_API_KEY";

/// Default location of the TOML secrets file.
///
/// Matches the layout of a Streamlit `secrets.toml` so existing deployments
/// can reuse their file:
///
/// ```toml
/// [whoisjson]
/// api_key = "your-api-key-here"
/// ```
pub const DEFAULT_SECRETS_FILE: &str = ".streamlit/secrets.toml";
/// Table inside the secrets file that holds the WhoisJSON settings.
pub const SECRETS_TABLE: &str = "whoisjson";
/// Key inside [`SECRETS_TABLE`] that holds the API key.
pub const SECRETS_API_KEY: &str = "api_key";

/// Default User-Agent sent with every API request.
pub const DEFAULT_USER_AGENT: &str = concat!("whoisjson_explorer/", env!("CARGO_PKG_VERSION"));

/// Timestamp layout used in export file names (e.g. `20260101_120000`).
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Log a progress line every N domains during a batch run.
pub const LOGGING_INTERVAL: usize = 5;
