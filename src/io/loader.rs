/*!
 * Input Loader
 * Parses the line-oriented process description format
 *
 * Record lines carry five `;`-separated fields (a `:` delimiter is
 * normalized to `;`): label, burst time, arrival time, queue id, priority.
 * Empty lines and `#` comments are ignored. Unusable lines are skipped but
 * never silently: each one is reported as a diagnostic.
 */

use crate::core::errors::LoadError;
use crate::core::types::{Priority, QueueId, Tick};
use crate::process::Process;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Why a line was skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("expected 5 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("field '{field}' is not a valid number: '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("burst time must be at least 1")]
    ZeroBurst,
}

/// One skipped input line, with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line: usize,
    pub reason: SkipReason,
}

/// Parsed processes plus everything the parser had to skip
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub processes: Vec<Process>,
    pub diagnostics: Vec<LineDiagnostic>,
}

/// Parse process records from input text.
///
/// Never fails as a whole: bad lines become diagnostics, good lines become
/// processes.
#[must_use]
pub fn parse_records(input: &str) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let normalized = trimmed.replace(':', ";");
        let fields: Vec<&str> = normalized.split(';').map(str::trim).collect();
        if fields.len() < 5 {
            outcome.diagnostics.push(LineDiagnostic {
                line,
                reason: SkipReason::TooFewFields {
                    found: fields.len(),
                },
            });
            continue;
        }

        let burst = match parse_field::<Tick>(fields[1], "burst_time") {
            Ok(v) => v,
            Err(reason) => {
                outcome.diagnostics.push(LineDiagnostic { line, reason });
                continue;
            }
        };
        let arrival = match parse_field::<Tick>(fields[2], "arrival_time") {
            Ok(v) => v,
            Err(reason) => {
                outcome.diagnostics.push(LineDiagnostic { line, reason });
                continue;
            }
        };
        let queue_id = match parse_field::<QueueId>(fields[3], "queue_id") {
            Ok(v) => v,
            Err(reason) => {
                outcome.diagnostics.push(LineDiagnostic { line, reason });
                continue;
            }
        };
        let priority = match parse_field::<Priority>(fields[4], "priority") {
            Ok(v) => v,
            Err(reason) => {
                outcome.diagnostics.push(LineDiagnostic { line, reason });
                continue;
            }
        };

        if burst == 0 {
            // Zero-burst records are rejected here so the engine can assume
            // burst >= 1 everywhere.
            outcome.diagnostics.push(LineDiagnostic {
                line,
                reason: SkipReason::ZeroBurst,
            });
            continue;
        }

        outcome
            .processes
            .push(Process::new(fields[0], burst, arrival, queue_id, priority));
    }

    outcome
}

fn parse_field<T: std::str::FromStr>(value: &str, field: &'static str) -> Result<T, SkipReason> {
    value.parse().map_err(|_| SkipReason::InvalidField {
        field,
        value: value.to_string(),
    })
}

/// Load and parse one input file.
///
/// A missing or unreadable file is the only hard error; skipped lines are
/// logged and returned as diagnostics.
pub fn load_path(path: &Path) -> Result<LoadOutcome, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = parse_records(&text);
    for diagnostic in &outcome.diagnostics {
        warn!(
            path = %path.display(),
            line = diagnostic.line,
            reason = %diagnostic.reason,
            "skipped input line"
        );
    }
    info!(
        path = %path.display(),
        processes = outcome.processes.len(),
        skipped = outcome.diagnostics.len(),
        "input loaded"
    );
    Ok(outcome)
}
