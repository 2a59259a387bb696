//! WhoisJSON API client.
//!
//! This module provides:
//! - `LookupApi`, the trait seam the batch orchestrator is written against
//! - `WhoisJsonClient`, the reqwest implementation
//! - Request types (`Operation`, `RecordType`, `LookupRequest`)

mod client;
mod types;

// Re-export public API
pub use client::{LookupApi, WhoisJsonClient};
pub use types::{LookupRequest, Operation, RecordType};
