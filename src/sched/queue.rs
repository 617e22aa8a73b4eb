/*!
 * Run Queues
 * Policy-specific ready queues sharing one slice contract
 */

use crate::core::types::{QueueId, Tick};
use crate::process::Process;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Intra-queue scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Round-robin with a fixed time quantum
    RoundRobin { quantum: Tick },
    /// First-come first-served: each dispatch runs to completion
    Fcfs,
}

impl Policy {
    /// Slice granted to a process with `remaining` work left
    #[inline]
    #[must_use]
    pub fn slice_for(&self, remaining: Tick) -> Tick {
        match *self {
            Policy::RoundRobin { quantum } => quantum.min(remaining),
            Policy::Fcfs => remaining,
        }
    }
}

/// An ordered queue of ready processes under one policy.
///
/// Insertion order is the contract: processes leave from the head and are
/// appended at the tail, with no reordering by priority or burst time.
#[derive(Debug)]
pub struct RunQueue {
    id: QueueId,
    policy: Policy,
    ready: VecDeque<Process>,
}

impl RunQueue {
    #[must_use]
    pub fn new(id: QueueId, policy: Policy) -> Self {
        Self {
            id,
            policy,
            ready: VecDeque::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> QueueId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ready.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    /// Whether the queue holds at least one ready process
    #[inline]
    #[must_use]
    pub fn has_work(&self) -> bool {
        !self.ready.is_empty()
    }

    /// Append a process at the tail.
    ///
    /// Used for new arrivals and for requeueing a preempted process alike;
    /// the queue makes no distinction.
    pub fn enqueue(&mut self, process: Process) {
        self.ready.push_back(process);
    }

    /// Remove the head process together with the slice it should run.
    ///
    /// `now` is unused by the round-robin and FCFS policies but is part of
    /// the contract so a clock-aware policy (aging, deadlines) can slot in.
    pub fn next_slice(&mut self, _now: Tick) -> Option<(Process, Tick)> {
        let process = self.ready.pop_front()?;
        let slice = self.policy.slice_for(process.remaining());
        Some((process, slice))
    }
}
