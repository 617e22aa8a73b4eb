/*!
 * Dispatch Loop
 * Admission, strict-priority selection, slice accounting, idle skip
 */

use super::stats::{AverageMetrics, SimulationReport};
use super::Scheduler;
use crate::core::types::Tick;
use crate::process::Process;
use tracing::{debug, info, warn};

impl Scheduler {
    /// Move every pending process whose arrival time has been reached into
    /// its assigned queue.
    ///
    /// The pending list is arrival-sorted, so only a prefix is examined. A
    /// process naming an unconfigured queue is dropped here, loudly.
    fn admit(&mut self) {
        while self
            .pending
            .front()
            .is_some_and(|p| p.arrival_time() <= self.clock)
        {
            let process = match self.pending.pop_front() {
                Some(p) => p,
                None => break,
            };
            match self
                .queues
                .iter_mut()
                .find(|q| q.id() == process.queue_id())
            {
                Some(queue) => {
                    debug!(
                        label = process.label(),
                        queue = queue.id(),
                        clock = self.clock,
                        "process admitted"
                    );
                    queue.enqueue(process);
                }
                None => {
                    warn!(
                        label = process.label(),
                        queue = process.queue_id(),
                        "dropping process assigned to unknown queue"
                    );
                    self.stats.dropped += 1;
                }
            }
        }
    }

    /// First non-empty queue wins; lower queues are not consulted.
    ///
    /// Starvation of lower queues while higher ones have work is the MLQ
    /// contract, not a bug.
    fn next_candidate(&mut self) -> Option<(Process, Tick)> {
        let now = self.clock;
        self.queues
            .iter_mut()
            .find(|q| q.has_work())
            .and_then(|q| q.next_slice(now))
    }

    /// Run the dispatch loop to completion and produce the report.
    ///
    /// Each step charges one whole slice atomically: the clock only ever
    /// advances by a dispatched slice or by an idle jump to the next
    /// arrival, so no CPU time is lost or double-charged.
    pub fn run(mut self) -> SimulationReport {
        info!(clock = self.clock, "starting simulation");

        loop {
            self.admit();

            if let Some((mut process, slice)) = self.next_candidate() {
                debug_assert!(slice > 0, "queues never hold finished processes");
                process.run(slice, self.clock);
                self.clock += slice;
                self.stats.dispatches += 1;

                if process.is_finished() {
                    debug!(
                        label = process.label(),
                        clock = self.clock,
                        "process finished"
                    );
                    self.stats.completions += 1;
                    self.finished.push(process.finalize(self.clock));
                } else {
                    self.stats.requeues += 1;
                    let queue_id = process.queue_id();
                    match self.queues.iter_mut().find(|q| q.id() == queue_id) {
                        Some(queue) => queue.enqueue(process),
                        None => {
                            // Unreachable: admission already resolved this queue
                            warn!(
                                label = process.label(),
                                queue = queue_id,
                                "requeue target vanished, dropping process"
                            );
                            self.stats.dropped += 1;
                        }
                    }
                }
            } else if let Some(next) = self.pending.front() {
                // All queues empty but work still arrives later: jump the
                // clock straight to the next arrival instead of spinning.
                let arrival = next.arrival_time();
                debug_assert!(arrival > self.clock, "admission left an arrived process pending");
                debug!(from = self.clock, to = arrival, "cpu idle, skipping to next arrival");
                self.clock = arrival;
                self.stats.idle_jumps += 1;
            } else {
                break;
            }
        }

        // Reports list processes by label, not by completion order
        self.finished.sort_by(|a, b| a.label.cmp(&b.label));

        info!(
            clock = self.clock,
            finished = self.finished.len(),
            dropped = self.stats.dropped,
            "simulation complete"
        );

        let averages = AverageMetrics::from_records(&self.finished);
        SimulationReport {
            records: self.finished,
            averages,
            final_clock: self.clock,
            stats: self.stats,
        }
    }
}
