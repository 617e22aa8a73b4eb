/*!
 * Process Lifecycle
 * A unit of work moving through Pending -> Ready -> Running -> Finished
 */

use super::types::{ProcessMetrics, ProcessRecord};
use crate::core::types::{Priority, QueueId, Tick};

/// A process under simulation.
///
/// Input attributes are immutable after construction; only the remaining
/// work and the first-dispatch tick change while the process runs. Finishing
/// consumes the process and produces an immutable [`ProcessRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    label: String,
    burst_time: Tick,
    arrival_time: Tick,
    queue_id: QueueId,
    priority: Priority,
    remaining: Tick,
    first_dispatch: Option<Tick>,
}

impl Process {
    /// Create a process from one validated input record.
    ///
    /// The loader rejects zero-burst records before they reach the engine;
    /// a `burst_time` of at least 1 is assumed everywhere downstream.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        burst_time: Tick,
        arrival_time: Tick,
        queue_id: QueueId,
        priority: Priority,
    ) -> Self {
        debug_assert!(burst_time > 0, "zero-burst processes are rejected at load time");
        Self {
            label: label.into(),
            burst_time,
            arrival_time,
            queue_id,
            priority,
            remaining: burst_time,
            first_dispatch: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    #[must_use]
    pub fn burst_time(&self) -> Tick {
        self.burst_time
    }

    #[inline]
    #[must_use]
    pub fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    #[inline]
    #[must_use]
    pub fn queue_id(&self) -> QueueId {
        self.queue_id
    }

    #[inline]
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// CPU time still required before completion
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> Tick {
        self.remaining
    }

    /// Whether the process has received at least one slice
    #[inline]
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.first_dispatch.is_some()
    }

    /// Charge one execution slice to this process.
    ///
    /// The first call records the dispatch tick used to derive response
    /// time; later calls never touch it. Callers guarantee
    /// `0 < slice <= remaining`.
    pub fn run(&mut self, slice: Tick, now: Tick) {
        debug_assert!(slice > 0, "empty slice dispatched");
        debug_assert!(slice <= self.remaining, "slice exceeds remaining work");
        if self.first_dispatch.is_none() {
            self.first_dispatch = Some(now);
        }
        self.remaining -= slice;
    }

    /// Whether all required work has been charged
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Finalize metrics at the tick the process finished.
    ///
    /// Consumes the process: a finished process never re-enters a queue and
    /// its record is immutable from here on. Must be called exactly once,
    /// when `is_finished()` first becomes true.
    #[must_use]
    pub fn finalize(self, now: Tick) -> ProcessRecord {
        debug_assert!(self.is_finished(), "finalize called with work remaining");
        let first_dispatch = self.first_dispatch.unwrap_or(self.arrival_time);
        let completion_time = now;
        let turnaround_time = completion_time - self.arrival_time;
        let waiting_time = turnaround_time - self.burst_time;
        let response_time = first_dispatch - self.arrival_time;
        ProcessRecord {
            label: self.label,
            burst_time: self.burst_time,
            arrival_time: self.arrival_time,
            queue_id: self.queue_id,
            priority: self.priority,
            metrics: ProcessMetrics {
                waiting_time,
                completion_time,
                response_time,
                turnaround_time,
            },
        }
    }
}
