/*!
 * Report Writer
 * Renders simulation results in the results-file format
 */

use crate::core::errors::ReportError;
use crate::sched::SimulationReport;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// Render one results file body.
///
/// Layout: a `#file:` header naming the input, a column-header comment, one
/// `;`-joined row per finished process (sorted by label), a blank line, and
/// the `$WT=..$; $CT=..$; $RT=..$; $TAT=..$;` summary with averages to one
/// decimal place.
pub fn render(input_name: &str, report: &SimulationReport) -> Result<String, ReportError> {
    let averages = report.averages.ok_or(ReportError::NoFinishedProcesses)?;

    let mut out = String::new();
    let _ = writeln!(out, "#file: {input_name}");
    let _ = writeln!(out, "#label; BT; AT; Q; Pr; WT; CT; RT; TAT");

    for record in &report.records {
        let m = record.metrics;
        let _ = writeln!(
            out,
            "{};{}; {}; {}; {}; {}; {}; {}; {}",
            record.label,
            record.burst_time,
            record.arrival_time,
            record.queue_id,
            record.priority,
            m.waiting_time,
            m.completion_time,
            m.response_time,
            m.turnaround_time
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "$WT={:.1}$; $CT={:.1}$; $RT={:.1}$; $TAT={:.1}$;",
        averages.waiting_time,
        averages.completion_time,
        averages.response_time,
        averages.turnaround_time
    );

    Ok(out)
}

/// Render and write one results file
pub fn write_to(
    path: &Path,
    input_name: &str,
    report: &SimulationReport,
) -> Result<(), ReportError> {
    let body = render(input_name, report)?;
    fs::write(path, body).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), processes = report.records.len(), "results written");
    Ok(())
}
