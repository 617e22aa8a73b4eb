/*!
 * MLQ Simulator - Main Entry Point
 *
 * Batch driver: runs each named input file through an independent
 * scheduling engine and writes one results file per input.
 */

use mlq_sim::{batch, init_tracing};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let inputs = if args.is_empty() {
        // Default run: make sure the basic sample input exists first
        match batch::ensure_sample_input(Path::new(batch::DEFAULT_INPUTS[0])) {
            Ok(_) => {}
            Err(e) => warn!(error = %e, "could not create sample input"),
        }
        batch::DEFAULT_INPUTS.iter().map(PathBuf::from).collect()
    } else {
        args
    };

    info!(inputs = inputs.len(), "starting batch run");
    let summary = batch::run(&inputs);
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch complete"
    );

    if summary.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
