//! Command-line interface definition.
//!
//! Global options configure logging, the API endpoint and secrets; each
//! subcommand selects one lookup (`whois`, `dns`, `ssl`) or a `batch` run.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::api::{Operation, RecordType};
use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_SECRETS_FILE, DEFAULT_USER_AGENT};
use crate::config::types::{Config, FailOn, LogFormat, LogLevel};

/// Explore WHOIS, DNS, and SSL certificate information for any domain.
#[derive(Debug, Parser)]
#[command(name = "whoisjson_explorer", version, about)]
#[allow(missing_docs)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// WhoisJSON API key (falls back to WHOISJSON_API_KEY, then the secrets file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// TOML secrets file with a `[whoisjson]` table holding `api_key`
    #[arg(long, global = true, default_value = DEFAULT_SECRETS_FILE)]
    pub secrets_file: PathBuf,

    /// API base URL
    #[arg(long, global = true, env = "WHOISJSON_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (transport default when omitted)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Directory to write the JSON result into
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Print the raw JSON payload as well as the formatted view
    #[arg(long, global = true)]
    pub raw: bool,
}

/// Lookup to perform.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get detailed domain registration information
    Whois {
        /// Domain name, e.g. example.com
        domain: String,
    },
    /// Query DNS records for a domain
    Dns {
        /// Domain name, e.g. example.com
        domain: String,
        /// Record type to query (all records when omitted)
        #[arg(long, value_enum, ignore_case = true, default_value_t = RecordType::All)]
        record_type: RecordType,
    },
    /// Verify SSL/TLS certificate information
    Ssl {
        /// Domain name, e.g. example.com
        domain: String,
    },
    /// Perform one lookup on multiple domains
    Batch(BatchArgs),
}

/// Arguments of the `batch` subcommand.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Lookup to run against every domain
    #[arg(long, value_enum, ignore_case = true)]
    pub operation: Operation,

    /// Record type for DNS batches
    #[arg(long, value_enum, ignore_case = true, default_value_t = RecordType::All)]
    pub record_type: RecordType,

    /// File with one domain per line (`-` reads stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Domains given directly on the command line
    pub domains: Vec<String>,

    /// Exit code policy once the batch completes
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Failure percentage threshold for `--fail-on pct-greater-than`
    #[arg(long, default_value_t = 10)]
    pub fail_on_pct_threshold: u8,
}

impl Cli {
    /// Splits parsed arguments into the library [`Config`] and the command to run.
    pub fn into_parts(self) -> (Config, Command) {
        let GlobalArgs {
            api_key,
            secrets_file,
            base_url,
            timeout_seconds,
            log_level,
            log_format,
            output,
            raw,
        } = self.global;

        let config = Config {
            log_level,
            log_format,
            base_url,
            timeout_seconds,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_key,
            secrets_file,
            output_dir: output,
            show_raw: raw,
        };
        (config, self.command)
    }
}
