//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources created
//! once at process start:
//! - Logger
//! - HTTP client and WhoisJSON API client
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{init_api_client, init_http_client};
pub use logger::init_logger_with;
