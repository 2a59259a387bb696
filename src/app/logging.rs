//! Progress logging utilities.

use std::time::Instant;

use log::info;

/// Logs how far a batch has got and the lookup rate so far.
pub fn log_progress(start_time: Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    #[allow(clippy::cast_precision_loss)]
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {}/{} domains in {:.2} seconds (~{:.2} lookups/sec)",
        completed, total, elapsed_secs, rate
    );
}
