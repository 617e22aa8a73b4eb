/*!
 * MLQ Scheduler Simulator Library
 * Discrete-event simulation of a multi-level queue CPU scheduler
 *
 * The core engine (`sched`) consumes validated processes and produces
 * finished records with timing metrics; everything else (loading input
 * files, writing results, the batch driver) is an adapter around it.
 */

pub mod batch;
pub mod core;
pub mod io;
pub mod process;
pub mod sched;
pub mod trace;

// Re-exports (self::core disambiguates from the core crate)
pub use self::core::errors::{BatchError, LoadError, ReportError};
pub use self::core::types::{Priority, QueueId, Tick};
pub use process::{Process, ProcessMetrics, ProcessRecord};
pub use sched::{
    simulate, AverageMetrics, Policy, RunQueue, Scheduler, SchedulerStats, SimulationReport,
};
pub use trace::init_tracing;
