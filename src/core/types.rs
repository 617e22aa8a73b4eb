/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated clock value, in ticks since simulation start
pub type Tick = u64;

/// Identifier of a scheduling queue (1 is the highest-priority queue)
pub type QueueId = u32;

/// Informational process priority from the input file.
///
/// Dispatch order is keyed by queue id, never by this field.
pub type Priority = i32;
