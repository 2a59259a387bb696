//! Error handling.
//!
//! This module provides:
//! - Error type definitions for every layer (initialization, configuration,
//!   input, lookups, export)
//! - The `ErrorKind` classification recorded for failed lookups
//! - Categorization of transport errors
//!
//! Batch runs never propagate `LookupError`; they record it as a failure
//! outcome. Single lookups surface it directly.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    ConfigurationError, ErrorKind, ExportError, InitializationError, InputError, LookupError,
};
