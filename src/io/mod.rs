/*!
 * I/O Adapters
 * Input parsing and results rendering around the core engine
 */

pub mod loader;
pub mod report;

pub use loader::{LineDiagnostic, LoadOutcome, SkipReason};
