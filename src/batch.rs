/*!
 * Batch Driver
 * Runs the simulator over a list of input files
 *
 * Each input gets an entirely independent engine instance; one failing file
 * never prevents the remaining files from being attempted.
 */

use crate::core::errors::BatchError;
use crate::io::{loader, report};
use crate::sched::Scheduler;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Inputs processed when no paths are given on the command line
pub const DEFAULT_INPUTS: [&str; 3] = ["mlq001.txt", "mlq002.txt", "mlq003.txt"];

/// Sample records written when the default input is missing: two processes
/// per round-robin queue plus one FCFS process, all arriving at t=0.
const SAMPLE_INPUT: &str = "\
# Sample MLQ input
#label; burst time (BT); arrival time (AT); queue (Q); priority (Pr)
A;6; 0; 1; 5
B;9; 0; 1; 4
C;10; 0; 2; 3
D;15; 0; 2; 3
E;8; 0; 3; 2
";

/// Outcome counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Write the sample input file if `path` does not exist.
///
/// Returns whether a file was created.
pub fn ensure_sample_input(path: &Path) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    std::fs::write(path, SAMPLE_INPUT)?;
    info!(path = %path.display(), "sample input created");
    Ok(true)
}

/// Results path for an input: `results_<stem>.txt` next to the input
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("results_{stem}.txt"))
}

fn run_one(input: &Path) -> Result<(), BatchError> {
    let outcome = loader::load_path(input)?;
    if outcome.processes.is_empty() {
        warn!(path = %input.display(), "no usable process records, skipping report");
        return Ok(());
    }

    let mut scheduler = Scheduler::new();
    scheduler.load(outcome.processes);
    let result = scheduler.run();

    let input_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    report::write_to(&output_path(input), &input_name, &result)?;
    Ok(())
}

/// Run every input through its own engine, continuing past failures
pub fn run(inputs: &[PathBuf]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for input in inputs {
        info!(path = %input.display(), "processing input");
        match run_one(input) {
            Ok(()) => summary.succeeded += 1,
            Err(e) => {
                error!(path = %input.display(), error = %e, "input failed");
                summary.failed += 1;
            }
        }
    }

    summary
}
