//! Configuration types.
//!
//! This module defines the enums and structs shared by the CLI and the library
//! configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_SECRETS_FILE, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy for batch runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the batch completes
    Never,
    /// Exit 2 if any domain failed
    AnyFailure,
    /// Exit 2 if the failure percentage exceeds the threshold
    PctGreaterThan,
}

impl FailOn {
    /// Maps a finished batch to a process exit code.
    ///
    /// `total` is the number of visits, `failed` the number of failed visits.
    pub fn exit_code(self, pct_threshold: u8, total: usize, failed: usize) -> i32 {
        match self {
            FailOn::Never => 0,
            FailOn::AnyFailure => {
                if failed > 0 {
                    2
                } else {
                    0
                }
            }
            FailOn::PctGreaterThan => {
                if total == 0 {
                    return 0;
                }
                #[allow(clippy::cast_precision_loss)]
                let failure_pct = (failed as f64 / total as f64) * 100.0;
                if failure_pct > f64::from(pct_threshold) {
                    2
                } else {
                    0
                }
            }
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through the CLI.
///
/// # Examples
///
/// ```no_run
/// use whoisjson_explorer::Config;
///
/// let config = Config {
///     api_key: Some("secret".to_string()),
///     base_url: "http://127.0.0.1:8080/api/v1".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// API base URL (endpoint paths are appended to it)
    pub base_url: String,

    /// Per-request timeout in seconds (`None` keeps the transport default)
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// API key given explicitly (takes precedence over env and secrets file)
    pub api_key: Option<String>,

    /// TOML secrets file consulted when no explicit or env key is present
    pub secrets_file: PathBuf,

    /// Directory to write JSON exports into (no export when unset)
    pub output_dir: Option<PathBuf>,

    /// Print the raw JSON payload in addition to the formatted view
    pub show_raw: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_key: None,
            secrets_file: PathBuf::from(DEFAULT_SECRETS_FILE),
            output_dir: None,
            show_raw: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://whoisjson.com/api/v1");
        assert_eq!(config.timeout_seconds, None);
        assert!(config.api_key.is_none());
        assert_eq!(config.secrets_file, PathBuf::from(".streamlit/secrets.toml"));
        assert!(config.output_dir.is_none());
        assert!(!config.show_raw);
    }

    #[test]
    fn test_fail_on_never_always_zero() {
        assert_eq!(FailOn::Never.exit_code(10, 10, 10), 0);
        assert_eq!(FailOn::Never.exit_code(10, 10, 0), 0);
    }

    #[test]
    fn test_fail_on_any_failure() {
        assert_eq!(FailOn::AnyFailure.exit_code(10, 10, 1), 2);
        assert_eq!(FailOn::AnyFailure.exit_code(10, 10, 0), 0);
    }

    #[test]
    fn test_fail_on_pct_threshold() {
        // 1 of 10 is exactly 10%, not greater than the threshold
        assert_eq!(FailOn::PctGreaterThan.exit_code(10, 10, 1), 0);
        assert_eq!(FailOn::PctGreaterThan.exit_code(10, 10, 2), 2);
        assert_eq!(FailOn::PctGreaterThan.exit_code(10, 0, 0), 0);
    }
}
