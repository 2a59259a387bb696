//! JSON export files.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use log::info;
use serde_json::Value;

use crate::api::Operation;
use crate::batch::BatchResult;
use crate::config::EXPORT_TIMESTAMP_FORMAT;
use crate::error_handling::ExportError;

/// File name for a single lookup export: `{slug}_{domain}_{YYYYmmdd_HHMMSS}.json`.
///
/// Path separators in the domain are replaced so the name stays a single path
/// component.
pub fn single_export_file_name<Tz: TimeZone>(
    operation: Operation,
    domain: &str,
    at: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let safe_domain: String = domain
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!(
        "{}_{}_{}.json",
        operation.slug(),
        safe_domain,
        at.format(EXPORT_TIMESTAMP_FORMAT)
    )
}

/// File name for a batch export: `batch_{label}_{YYYYmmdd_HHMMSS}.json`.
///
/// The label is the operation's display label, lower-cased with spaces
/// replaced by underscores (e.g. `batch_dns_lookup_...`).
pub fn batch_export_file_name<Tz: TimeZone>(operation: Operation, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "batch_{}_{}.json",
        operation.label().to_lowercase().replace(' ', "_"),
        at.format(EXPORT_TIMESTAMP_FORMAT)
    )
}

/// Writes `value` as pretty-printed JSON to `dir/file_name`, creating `dir`.
///
/// # Errors
///
/// Returns `ExportError` if serialization or any filesystem operation fails.
pub fn write_json_export(dir: &Path, file_name: &str, value: &Value) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    let data = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, data).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!("Saved JSON to {}", path.display());
    Ok(path)
}

/// Exports a single lookup payload into `dir`.
pub fn export_single(
    dir: &Path,
    operation: Operation,
    domain: &str,
    payload: &Value,
) -> Result<PathBuf, ExportError> {
    let file_name = single_export_file_name(operation, domain, &Local::now());
    write_json_export(dir, &file_name, payload)
}

/// Exports every outcome of a batch, failures included, into `dir`.
pub fn export_batch(dir: &Path, result: &BatchResult) -> Result<PathBuf, ExportError> {
    let file_name = batch_export_file_name(result.operation(), &Local::now());
    write_json_export(dir, &file_name, &result.export_value())
}
