/*!
 * Process Types
 * Finished-process records exposed by the engine
 */

use crate::core::types::{Priority, QueueId, Tick};
use serde::{Deserialize, Serialize};

/// Finalized timing metrics for one finished process.
///
/// Identities that hold for every record under valid input:
/// `turnaround_time = completion_time - arrival_time` and
/// `waiting_time = turnaround_time - burst_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub waiting_time: Tick,
    pub completion_time: Tick,
    pub response_time: Tick,
    pub turnaround_time: Tick,
}

/// One row of the simulation output: input attributes plus finalized metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub label: String,
    pub burst_time: Tick,
    pub arrival_time: Tick,
    pub queue_id: QueueId,
    pub priority: Priority,
    #[serde(flatten)]
    pub metrics: ProcessMetrics,
}
