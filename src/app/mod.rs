//! Main application modules.
//!
//! This module provides the terminal presenter, progress logging and
//! statistics printing used by the command runner.

pub mod logging;
pub mod presenter;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use presenter::{Presenter, TerminalPresenter};
pub use statistics::print_batch_statistics;
