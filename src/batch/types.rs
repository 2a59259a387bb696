//! Batch result types.

use std::collections::HashMap;

use serde_json::{json, Value};
use strum::IntoEnumIterator;

use crate::api::Operation;
use crate::error_handling::{ErrorKind, LookupError};

/// Per-domain result of a lookup: the JSON payload or a classified failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The API answered 2xx with this JSON body.
    Success(Value),
    /// The lookup failed.
    Failure {
        /// Error classification
        kind: ErrorKind,
        /// HTTP status, when the API answered
        status_code: Option<u16>,
        /// Response body for HTTP errors, rendered error otherwise
        message: String,
    },
}

impl LookupOutcome {
    /// Whether the lookup returned a payload.
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success(_))
    }

    /// JSON written to exports: the payload itself, or an error descriptor.
    pub fn export_value(&self) -> Value {
        match self {
            LookupOutcome::Success(payload) => payload.clone(),
            LookupOutcome::Failure {
                kind,
                status_code,
                message,
            } => json!({
                "error": message,
                "kind": kind,
                "status_code": status_code,
            }),
        }
    }
}

impl From<LookupError> for LookupOutcome {
    fn from(error: LookupError) -> Self {
        LookupOutcome::Failure {
            kind: error.kind(),
            status_code: error.status_code(),
            message: error.message(),
        }
    }
}

impl From<Result<Value, LookupError>> for LookupOutcome {
    fn from(result: Result<Value, LookupError>) -> Self {
        match result {
            Ok(payload) => LookupOutcome::Success(payload),
            Err(e) => e.into(),
        }
    }
}

/// Progress notification emitted after each visited domain.
#[derive(Debug, Clone, Copy)]
pub struct BatchProgress<'a> {
    /// Zero-based position of the domain in the input list
    pub index: usize,
    /// Length of the input list
    pub total: usize,
    /// Domain just visited
    pub domain: &'a str,
    /// Outcome recorded for it
    pub outcome: &'a LookupOutcome,
}

impl BatchProgress<'_> {
    /// Fraction of the batch completed, `(index + 1) / total`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = (self.index + 1) as f64 / self.total as f64;
        fraction
    }
}

/// Outcomes of one batch run, keyed by domain in input order.
///
/// A domain listed twice is visited twice: the second outcome replaces the
/// first (keeping its position) and both visits count towards the totals, so
/// `success_count() + failure_count() == visits()` may exceed `len()`.
#[derive(Debug, Clone)]
pub struct BatchResult {
    operation: Operation,
    entries: Vec<(String, LookupOutcome)>,
    positions: HashMap<String, usize>,
    visits: usize,
    successes: usize,
    failures_by_kind: HashMap<ErrorKind, usize>,
}

impl BatchResult {
    pub(crate) fn new(operation: Operation) -> Self {
        Self {
            operation,
            entries: Vec::new(),
            positions: HashMap::new(),
            visits: 0,
            successes: 0,
            failures_by_kind: HashMap::new(),
        }
    }

    /// Records one visit and returns the stored outcome.
    pub(crate) fn record(&mut self, domain: &str, outcome: LookupOutcome) -> &LookupOutcome {
        self.visits += 1;
        match &outcome {
            LookupOutcome::Success(_) => self.successes += 1,
            LookupOutcome::Failure { kind, .. } => {
                *self.failures_by_kind.entry(*kind).or_insert(0) += 1;
            }
        }

        let position = match self.positions.get(domain) {
            Some(&pos) => {
                self.entries[pos].1 = outcome;
                pos
            }
            None => {
                self.entries.push((domain.to_string(), outcome));
                let pos = self.entries.len() - 1;
                self.positions.insert(domain.to_string(), pos);
                pos
            }
        };
        &self.entries[position].1
    }

    /// Operation applied to every domain.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Number of distinct domains in the result.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no domain was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest outcome for `domain`.
    pub fn get(&self, domain: &str) -> Option<&LookupOutcome> {
        self.positions.get(domain).map(|&pos| &self.entries[pos].1)
    }

    /// Domains and outcomes in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LookupOutcome)> {
        self.entries.iter().map(|(d, o)| (d.as_str(), o))
    }

    /// Total lookups performed, duplicates included.
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// Successful visits.
    pub fn success_count(&self) -> usize {
        self.successes
    }

    /// Failed visits.
    pub fn failure_count(&self) -> usize {
        self.visits - self.successes
    }

    /// Failed visits per error kind, skipping kinds with no failures.
    pub fn failures_by_kind(&self) -> Vec<(ErrorKind, usize)> {
        ErrorKind::iter()
            .filter_map(|kind| {
                self.failures_by_kind
                    .get(&kind)
                    .copied()
                    .filter(|&count| count > 0)
                    .map(|count| (kind, count))
            })
            .collect()
    }

    /// Ordered JSON object `domain -> payload or error descriptor`.
    pub fn export_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (domain, outcome) in self.iter() {
            map.insert(domain.to_string(), outcome.export_value());
        }
        Value::Object(map)
    }
}
