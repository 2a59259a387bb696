//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, env var names, defaults)
//! - CLI option types and parsing
//! - The library `Config` struct

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{BatchArgs, Cli, Command, GlobalArgs};
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel};
