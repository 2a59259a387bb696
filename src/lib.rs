//! whoisjson_explorer library: WHOIS, DNS and SSL lookups through the WhoisJSON API
//!
//! This library provides a small client for the WhoisJSON HTTP API and a batch
//! orchestrator that applies one lookup to a list of domains, recording a
//! success payload or a classified failure for each one.
//!
//! # Example
//!
//! ```no_run
//! use whoisjson_explorer::config::Command;
//! use whoisjson_explorer::{run, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: Some("your-api-key".to_string()),
//!     ..Default::default()
//! };
//! let command = Command::Whois {
//!     domain: "example.com".to_string(),
//! };
//!
//! let report = run(config, command).await?;
//! println!("{} succeeded, {} failed", report.successful, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod api;
pub mod app;
pub mod batch;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod secrets;

// Re-export public API
pub use api::{LookupApi, LookupRequest, Operation, RecordType, WhoisJsonClient};
pub use batch::{run_batch, BatchProgress, BatchResult, LookupOutcome};
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use run::{run, run_with, RunReport};

// Internal run module (wires secrets, client, orchestrator and presenter together)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::api::{LookupApi, LookupRequest, Operation, RecordType};
    use crate::app::{log_progress, print_batch_statistics, Presenter, TerminalPresenter};
    use crate::batch::run_batch;
    use crate::config::{BatchArgs, Command, Config, LOGGING_INTERVAL};
    use crate::domain::collect_domains;
    use crate::error_handling::InputError;
    use crate::export::{export_batch, export_single};
    use crate::initialization::init_api_client;
    use crate::secrets::ChainedSecrets;

    /// Results of one command.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of lookups performed (duplicates included)
        pub total: usize,
        /// Number of lookups that succeeded
        pub successful: usize,
        /// Number of lookups that failed
        pub failed: usize,
        /// Path of the JSON export, when one was written
        pub export_path: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
        /// Process exit code the CLI should use
        pub exit_code: i32,
    }

    /// Runs `command` with the provided configuration.
    ///
    /// Resolves the API key (flag, then `WHOISJSON_API_KEY`, then the secrets
    /// file), builds the API client once and prints results to stdout.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - No API key can be found, or the secrets file is malformed
    /// - The HTTP client cannot be built or the base URL is invalid
    /// - The domain is blank, or the batch domain list is empty or cannot be read
    /// - Writing to stdout or writing the export fails
    ///
    /// Failed lookups are not errors: they are reported and counted.
    pub async fn run(config: Config, command: Command) -> Result<RunReport> {
        let api_key = ChainedSecrets::from_config(&config).require_api_key()?;
        info!("✅ API key loaded successfully");

        let client =
            init_api_client(&config, api_key).context("Failed to initialize API client")?;
        let mut presenter = TerminalPresenter::stdout(config.show_raw);

        run_with(&config, command, &client, &mut presenter).await
    }

    /// Runs `command` against an already constructed API and presenter.
    pub async fn run_with<A, P>(
        config: &Config,
        command: Command,
        api: &A,
        presenter: &mut P,
    ) -> Result<RunReport>
    where
        A: LookupApi + ?Sized,
        P: Presenter,
    {
        match command {
            Command::Whois { domain } => {
                single_lookup(config, LookupRequest::new(domain, Operation::Whois), api, presenter)
                    .await
            }
            Command::Dns {
                domain,
                record_type,
            } => {
                let request =
                    LookupRequest::new(domain, Operation::Dns).with_record_type(record_type);
                single_lookup(config, request, api, presenter).await
            }
            Command::Ssl { domain } => {
                single_lookup(config, LookupRequest::new(domain, Operation::Ssl), api, presenter)
                    .await
            }
            Command::Batch(args) => batch_lookup(config, args, api, presenter).await,
        }
    }

    async fn single_lookup<A, P>(
        config: &Config,
        request: LookupRequest,
        api: &A,
        presenter: &mut P,
    ) -> Result<RunReport>
    where
        A: LookupApi + ?Sized,
        P: Presenter,
    {
        // Nothing is sent for a blank domain
        if request.domain().is_empty() {
            return Err(InputError::EmptyDomain.into());
        }

        let start_time = Instant::now();
        info!(
            "Fetching {} for {}...",
            request.operation().label(),
            request.domain()
        );

        match api.lookup(&request).await {
            Ok(payload) => {
                presenter
                    .lookup_succeeded(&request, &payload)
                    .context("Failed to write result")?;

                let export_path = match &config.output_dir {
                    Some(dir) => {
                        let path =
                            export_single(dir, request.operation(), request.domain(), &payload)
                                .context("Failed to export result")?;
                        presenter.exported(&path).context("Failed to write result")?;
                        Some(path)
                    }
                    None => None,
                };

                Ok(RunReport {
                    total: 1,
                    successful: 1,
                    failed: 0,
                    export_path,
                    elapsed_seconds: start_time.elapsed().as_secs_f64(),
                    exit_code: 0,
                })
            }
            Err(e) => {
                warn!("{} failed for {}: {}", request.operation().slug(), request.domain(), e);
                presenter
                    .lookup_failed(&request, &e)
                    .context("Failed to write result")?;
                Ok(RunReport {
                    total: 1,
                    successful: 0,
                    failed: 1,
                    export_path: None,
                    elapsed_seconds: start_time.elapsed().as_secs_f64(),
                    exit_code: 1,
                })
            }
        }
    }

    async fn batch_lookup<A, P>(
        config: &Config,
        args: BatchArgs,
        api: &A,
        presenter: &mut P,
    ) -> Result<RunReport>
    where
        A: LookupApi + ?Sized,
        P: Presenter,
    {
        // Empty input is rejected here, before the orchestrator starts
        let domains = collect_domains(&args.domains, args.file.as_deref()).await?;
        let record_type = if args.operation == Operation::Dns {
            args.record_type
        } else {
            RecordType::All
        };

        presenter
            .batch_started(args.operation, domains.len())
            .context("Failed to write result")?;
        info!(
            "Running {} on {} domains",
            args.operation.label(),
            domains.len()
        );

        let start_time = Instant::now();
        let result = run_batch(api, &domains, args.operation, record_type, |progress| {
            if let Err(e) = presenter.batch_progress(progress) {
                warn!("Failed to report progress for {}: {}", progress.domain, e);
            }
            let completed = progress.index + 1;
            if completed % LOGGING_INTERVAL == 0 || completed == progress.total {
                log_progress(start_time, completed, progress.total);
            }
        })
        .await;

        presenter
            .batch_finished(&result)
            .context("Failed to write result")?;
        print_batch_statistics(&result);

        // Whatever was gathered is exported, failures included
        let export_path = match &config.output_dir {
            Some(dir) => {
                let path = export_batch(dir, &result).context("Failed to export batch results")?;
                presenter.exported(&path).context("Failed to write result")?;
                Some(path)
            }
            None => None,
        };

        Ok(RunReport {
            total: result.visits(),
            successful: result.success_count(),
            failed: result.failure_count(),
            export_path,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
            exit_code: args.fail_on.exit_code(
                args.fail_on_pct_threshold,
                result.visits(),
                result.failure_count(),
            ),
        })
    }
}
