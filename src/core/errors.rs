/*!
 * Error Types
 * Centralized error handling with thiserror and miette support
 *
 * The dispatch engine itself has no recoverable error states; every failure
 * mode lives at the I/O boundary (loading inputs, writing reports).
 */

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Input-loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("failed to read input file '{}'", path.display())]
    #[diagnostic(
        code(loader::io),
        help("Check that the file exists and is readable. Missing inputs do not abort the batch.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Report-writing errors
#[derive(Error, Debug, Diagnostic)]
pub enum ReportError {
    #[error("no finished processes to report")]
    #[diagnostic(
        code(report::no_finished),
        help("Every usable record in the input was skipped, or the input was empty.")
    )]
    NoFinishedProcesses,

    #[error("failed to write results file '{}'", path.display())]
    #[diagnostic(
        code(report::io),
        help("Check permissions on the output directory. Write failures do not abort the batch.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-file errors surfaced by the batch driver
#[derive(Error, Debug, Diagnostic)]
pub enum BatchError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Report(#[from] ReportError),
}
