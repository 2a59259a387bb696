//! Batch lookup orchestration.
//!
//! Applies one operation to an ordered list of domains, one lookup at a time.
//! Every per-domain failure is caught, classified and recorded; nothing
//! aborts the batch once it has started.

mod types;


use log::debug;

use crate::api::{LookupApi, LookupRequest, Operation, RecordType};

// Re-export public API
pub use types::{BatchProgress, BatchResult, LookupOutcome};

/// Runs `operation` against every domain in `domains`, in order.
///
/// `record_type` only applies to DNS batches. `on_progress` is called after
/// each visit; it is advisory and cannot stop the batch.
///
/// `domains` must not be empty: callers reject empty input before starting a
/// batch (see `domain::parse_domain_list`).
///
/// # Example
///
/// ```no_run
/// use whoisjson_explorer::api::{Operation, RecordType, WhoisJsonClient};
/// use whoisjson_explorer::batch::run_batch;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WhoisJsonClient::new(reqwest::Client::new(), "https://whoisjson.com/api/v1", "key")?;
/// let domains = vec!["example.com".to_string(), "rust-lang.org".to_string()];
/// let result = run_batch(&client, &domains, Operation::Whois, RecordType::All, |p| {
///     println!("{:.0}% done", p.fraction() * 100.0);
/// })
/// .await;
/// println!("{} succeeded, {} failed", result.success_count(), result.failure_count());
/// # Ok(())
/// # }
/// ```
pub async fn run_batch<A, F>(
    api: &A,
    domains: &[String],
    operation: Operation,
    record_type: RecordType,
    mut on_progress: F,
) -> BatchResult
where
    A: LookupApi + ?Sized,
    F: FnMut(&BatchProgress<'_>),
{
    debug_assert!(!domains.is_empty(), "empty domain list must be rejected by the caller");

    let total = domains.len();
    let mut result = BatchResult::new(operation);

    for (index, domain) in domains.iter().enumerate() {
        let request = LookupRequest::new(domain.as_str(), operation).with_record_type(record_type);
        let outcome = LookupOutcome::from(api.lookup(&request).await);
        debug!(
            "{} {}/{} {}: {}",
            operation.slug(),
            index + 1,
            total,
            domain,
            if outcome.is_success() { "ok" } else { "failed" }
        );

        let outcome = result.record(domain, outcome);
        on_progress(&BatchProgress {
            index,
            total,
            domain,
            outcome,
        });
    }

    result
}
