/*!
 * Scheduler Statistics
 * Operational counters and metric averages over finished processes
 */

use crate::core::types::Tick;
use crate::process::ProcessRecord;
use serde::{Deserialize, Serialize};

/// Operational counters for one simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    /// Slices charged to a process
    pub dispatches: u64,
    /// Processes returned to their queue tail after a non-final slice
    pub requeues: u64,
    /// Processes that ran to completion
    pub completions: u64,
    /// Clock jumps over CPU-idle gaps
    pub idle_jumps: u64,
    /// Processes dropped at admission for an unknown queue id
    pub dropped: u64,
}

/// Arithmetic means over all finished processes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AverageMetrics {
    pub waiting_time: f64,
    pub completion_time: f64,
    pub response_time: f64,
    pub turnaround_time: f64,
}

impl AverageMetrics {
    /// Compute averages over `records`; `None` when there is nothing to average
    #[must_use]
    pub fn from_records(records: &[ProcessRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let count = records.len() as f64;
        let mut waiting = 0u64;
        let mut completion = 0u64;
        let mut response = 0u64;
        let mut turnaround = 0u64;
        for record in records {
            waiting += record.metrics.waiting_time;
            completion += record.metrics.completion_time;
            response += record.metrics.response_time;
            turnaround += record.metrics.turnaround_time;
        }
        Some(Self {
            waiting_time: waiting as f64 / count,
            completion_time: completion as f64 / count,
            response_time: response as f64 / count,
            turnaround_time: turnaround as f64 / count,
        })
    }
}

/// Everything one simulation run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    /// Finished processes, sorted by label
    pub records: Vec<ProcessRecord>,
    /// `None` when no process finished
    pub averages: Option<AverageMetrics>,
    /// Clock value when the dispatch loop halted
    pub final_clock: Tick,
    pub stats: SchedulerStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessMetrics;

    fn record(label: &str, wt: Tick, ct: Tick, rt: Tick, tat: Tick) -> ProcessRecord {
        ProcessRecord {
            label: label.to_string(),
            burst_time: 1,
            arrival_time: 0,
            queue_id: 1,
            priority: 0,
            metrics: ProcessMetrics {
                waiting_time: wt,
                completion_time: ct,
                response_time: rt,
                turnaround_time: tat,
            },
        }
    }

    #[test]
    fn test_averages_empty_is_none() {
        assert!(AverageMetrics::from_records(&[]).is_none());
    }

    #[test]
    fn test_averages_arithmetic_mean() {
        let records = vec![record("a", 2, 10, 0, 10), record("b", 4, 20, 6, 20)];
        let avg = AverageMetrics::from_records(&records).unwrap();
        assert_eq!(avg.waiting_time, 3.0);
        assert_eq!(avg.completion_time, 15.0);
        assert_eq!(avg.response_time, 3.0);
        assert_eq!(avg.turnaround_time, 15.0);
    }
}
