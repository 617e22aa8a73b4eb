/*!
 * MLQ Scheduler
 * Strict-priority multi-level queue dispatch engine
 */

mod dispatch;
mod queue;
mod stats;

pub use queue::{Policy, RunQueue};
pub use stats::{AverageMetrics, SchedulerStats, SimulationReport};

use crate::core::types::Tick;
use crate::process::{Process, ProcessRecord};
use std::collections::VecDeque;
use tracing::info;

/// The dispatch engine.
///
/// Owns the simulated clock, the queue hierarchy (scanned in strict
/// ascending priority order), the arrival-sorted pending list, and the
/// finished records. One instance drives exactly one simulation run; batch
/// callers construct a fresh engine per input and share nothing.
pub struct Scheduler {
    clock: Tick,
    queues: Vec<RunQueue>,
    pending: VecDeque<Process>,
    finished: Vec<ProcessRecord>,
    stats: SchedulerStats,
}

impl Scheduler {
    /// Engine with the default MLQ hierarchy:
    /// queue 1 RR(3), queue 2 RR(5), queue 3 FCFS.
    #[must_use]
    pub fn new() -> Self {
        Self::with_queues(vec![
            RunQueue::new(1, Policy::RoundRobin { quantum: 3 }),
            RunQueue::new(2, Policy::RoundRobin { quantum: 5 }),
            RunQueue::new(3, Policy::Fcfs),
        ])
    }

    /// Engine with a custom hierarchy, highest-priority queue first
    #[must_use]
    pub fn with_queues(queues: Vec<RunQueue>) -> Self {
        info!(queues = queues.len(), "scheduler initialized");
        Self {
            clock: 0,
            queues,
            pending: VecDeque::new(),
            finished: Vec::new(),
            stats: SchedulerStats::default(),
        }
    }

    /// Submit processes for simulation.
    ///
    /// Stable-sorts by arrival time, so processes sharing an arrival tick
    /// keep their input order.
    pub fn load(&mut self, processes: Vec<Process>) {
        let mut processes = processes;
        processes.sort_by_key(Process::arrival_time);
        info!(count = processes.len(), "processes loaded");
        self.pending.extend(processes);
    }

    /// Current simulated clock value
    #[inline]
    #[must_use]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Snapshot of the run counters
    #[inline]
    #[must_use]
    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `processes` through a fresh default engine.
///
/// The one-shot form of the core contract: validated processes in,
/// finished records plus averages out.
#[must_use]
pub fn simulate(processes: Vec<Process>) -> SimulationReport {
    let mut scheduler = Scheduler::new();
    scheduler.load(processes);
    scheduler.run()
}
