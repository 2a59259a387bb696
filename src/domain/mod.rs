//! Domain list input.
//!
//! Batch input is free text with one domain per line. Lines are trimmed;
//! blank lines and `#` comments are dropped. Order and duplicates are kept:
//! the batch visits every line.

use std::path::Path;

use log::info;
use tokio::io::AsyncReadExt;

use crate::error_handling::InputError;


/// Splits `text` into an ordered domain list.
///
/// # Errors
///
/// Returns `InputError::EmptyDomainList` if no domain remains.
pub fn parse_domain_list(text: &str) -> Result<Vec<String>, InputError> {
    let domains: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if domains.is_empty() {
        return Err(InputError::EmptyDomainList);
    }
    Ok(domains)
}

/// Collects batch domains from command-line arguments and an optional file.
///
/// Arguments come first, then file lines. A `file` of `-` reads stdin.
///
/// # Errors
///
/// Returns `InputError::Read` if the file or stdin cannot be read, and
/// `InputError::EmptyDomainList` if nothing remains after filtering.
pub async fn collect_domains(
    args: &[String],
    file: Option<&Path>,
) -> Result<Vec<String>, InputError> {
    let mut text = args.join("\n");

    if let Some(path) = file {
        let content = if path.as_os_str() == "-" {
            info!("Reading domains from stdin");
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|source| InputError::Read {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            buf
        } else {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| InputError::Read {
                    source_name: path.display().to_string(),
                    source,
                })?
        };
        text.push('\n');
        text.push_str(&content);
    }

    parse_domain_list(&text)
}
