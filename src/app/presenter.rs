//! Terminal presentation of lookup results.

use std::io::{self, Write};
use std::path::Path;

use colored::*;
use serde_json::Value;

use crate::api::{LookupRequest, Operation};
use crate::batch::{BatchProgress, BatchResult, LookupOutcome};
use crate::error_handling::LookupError;

/// Receives lookup results for display.
///
/// The orchestrator and the single-lookup path only hand structured records to
/// a presenter; how they are rendered is up to the implementation.
pub trait Presenter {
    /// A single lookup returned `payload`.
    fn lookup_succeeded(&mut self, request: &LookupRequest, payload: &Value) -> io::Result<()>;

    /// A single lookup failed.
    fn lookup_failed(&mut self, request: &LookupRequest, error: &LookupError) -> io::Result<()>;

    /// A batch of `total` domains is about to start.
    fn batch_started(&mut self, operation: Operation, total: usize) -> io::Result<()>;

    /// One batch domain was visited.
    fn batch_progress(&mut self, progress: &BatchProgress<'_>) -> io::Result<()>;

    /// The batch is over; `result` holds every outcome.
    fn batch_finished(&mut self, result: &BatchResult) -> io::Result<()>;

    /// Results were written to `path`.
    fn exported(&mut self, path: &Path) -> io::Result<()>;
}

/// Writes human-readable results to a terminal (or any writer).
pub struct TerminalPresenter<W: Write> {
    out: W,
    show_raw: bool,
}

impl TerminalPresenter<io::Stdout> {
    /// Presenter writing to standard output.
    pub fn stdout(show_raw: bool) -> Self {
        Self::new(io::stdout(), show_raw)
    }
}

impl<W: Write> TerminalPresenter<W> {
    /// Presenter writing to `out`.
    pub fn new(out: W, show_raw: bool) -> Self {
        Self { out, show_raw }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_pretty(&mut self, value: &Value) -> io::Result<()> {
        let pretty = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(self.out, "{pretty}")
    }

    /// One `key: value` line per top-level field; nested values are pretty-printed.
    fn write_fields(&mut self, payload: &Value) -> io::Result<()> {
        let Some(fields) = payload.as_object() else {
            return self.write_pretty(payload);
        };
        for (key, value) in fields {
            match value {
                Value::Object(_) | Value::Array(_) => {
                    writeln!(self.out, "{}:", key.bold())?;
                    self.write_pretty(value)?;
                }
                other => writeln!(self.out, "{}: {}", key.bold(), scalar(other))?,
            }
        }
        Ok(())
    }
}

/// Renders a scalar without JSON string quotes.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `valid_from`/`valid_to` of an SSL payload, when both are present.
fn ssl_validity(payload: &Value) -> Option<(String, String)> {
    let from = payload.get("valid_from")?;
    let to = payload.get("valid_to")?;
    Some((scalar(from), scalar(to)))
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn lookup_succeeded(&mut self, request: &LookupRequest, payload: &Value) -> io::Result<()> {
        let title = request.operation().result_title(request.domain());
        writeln!(self.out, "{}", title.bold().underline())?;

        if self.show_raw {
            writeln!(self.out, "{}", "Raw JSON:".dimmed())?;
            self.write_pretty(payload)?;
            writeln!(self.out)?;
        }
        self.write_fields(payload)?;

        if request.operation() == Operation::Ssl {
            if let Some((from, to)) = ssl_validity(payload) {
                writeln!(self.out, "📅 Valid from: {from} to {to}")?;
            }
        }
        Ok(())
    }

    fn lookup_failed(&mut self, _request: &LookupRequest, error: &LookupError) -> io::Result<()> {
        writeln!(self.out, "{}", format!("❌ Error: {error}").red())
    }

    fn batch_started(&mut self, _operation: Operation, total: usize) -> io::Result<()> {
        writeln!(self.out, "Processing {total} domains...")
    }

    fn batch_progress(&mut self, progress: &BatchProgress<'_>) -> io::Result<()> {
        let prefix = format!("[{}/{}]", progress.index + 1, progress.total);
        match progress.outcome {
            LookupOutcome::Success(_) => writeln!(
                self.out,
                "{} {}",
                prefix.dimmed(),
                format!("✅ Completed: {}", progress.domain).green()
            ),
            LookupOutcome::Failure { message, .. } => writeln!(
                self.out,
                "{} {}",
                prefix.dimmed(),
                format!("❌ Failed: {} - {}", progress.domain, message).red()
            ),
        }
    }

    fn batch_finished(&mut self, result: &BatchResult) -> io::Result<()> {
        writeln!(
            self.out,
            "🎉 Batch operation completed! Processed {} domains ({} succeeded, {} failed)",
            result.visits(),
            result.success_count(),
            result.failure_count()
        )?;
        writeln!(self.out, "{}", "All Results:".bold())?;
        self.write_pretty(&result.export_value())
    }

    fn exported(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "📥 Saved JSON to {}", path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorKind;
    use serde_json::json;

    fn render(f: impl FnOnce(&mut TerminalPresenter<Vec<u8>>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut presenter = TerminalPresenter::new(Vec::new(), false);
        f(&mut presenter).expect("writing to a Vec cannot fail");
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_success_lists_top_level_fields() {
        let request = LookupRequest::new("example.com", Operation::Whois);
        let payload = json!({"registrar": "Acme", "nameserver": ["ns1", "ns2"], "registered": true});
        let out = render(|p| p.lookup_succeeded(&request, &payload));

        assert!(out.contains("WHOIS Information for example.com"));
        assert!(out.contains("registrar: Acme"));
        assert!(out.contains("registered: true"));
        assert!(out.contains("nameserver:"));
        assert!(out.contains("\"ns1\""));
    }

    #[test]
    fn test_ssl_validity_line() {
        let request = LookupRequest::new("example.com", Operation::Ssl);
        let payload = json!({"valid_from": "2026-01-01", "valid_to": "2027-01-01"});
        let out = render(|p| p.lookup_succeeded(&request, &payload));
        assert!(out.contains("Valid from: 2026-01-01 to 2027-01-01"));
    }

    #[test]
    fn test_failure_is_inline_error() {
        let request = LookupRequest::new("example.com", Operation::Dns);
        let error = LookupError::Http {
            status: 401,
            body: "bad token".to_string(),
        };
        let out = render(|p| p.lookup_failed(&request, &error));
        assert!(out.contains("❌ Error: HTTP 401: bad token"));
    }

    #[test]
    fn test_batch_progress_lines() {
        let ok = LookupOutcome::Success(json!({}));
        let failed = LookupOutcome::Failure {
            kind: ErrorKind::NetworkError,
            status_code: None,
            message: "connection refused".to_string(),
        };
        let out = render(|p| {
            p.batch_progress(&BatchProgress {
                index: 0,
                total: 2,
                domain: "a.com",
                outcome: &ok,
            })?;
            p.batch_progress(&BatchProgress {
                index: 1,
                total: 2,
                domain: "b.com",
                outcome: &failed,
            })
        });
        assert!(out.contains("[1/2] ✅ Completed: a.com"));
        assert!(out.contains("[2/2] ❌ Failed: b.com - connection refused"));
    }
}
