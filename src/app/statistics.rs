//! Batch statistics logging.

use log::info;

use crate::batch::BatchResult;

/// Logs the success/failure totals and the failure breakdown per error kind.
pub fn print_batch_statistics(result: &BatchResult) {
    info!(
        "Batch statistics: operation={}, visits={}, distinct={}, successful={}, failed={}",
        result.operation().slug(),
        result.visits(),
        result.len(),
        result.success_count(),
        result.failure_count()
    );

    let breakdown = result.failures_by_kind();
    if !breakdown.is_empty() {
        info!("Failure Counts ({} total):", result.failure_count());
        for (kind, count) in breakdown {
            info!("   {}: {}", kind.as_str(), count);
        }
    }

    if result.visits() > result.len() {
        info!(
            "{} duplicate domain line(s): later outcomes replaced earlier ones",
            result.visits() - result.len()
        );
    }
}
