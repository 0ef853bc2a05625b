//! A CPU scheduling policy simulator.
//!
//! Given a fixed set of processes (arrival time, burst time, optional
//! priority) this library simulates a policy over a single logical CPU and
//! returns each process's completion, turnaround and waiting time, the two
//! averages, and the full execution timeline as a Gantt trace.
//!
//! Three policies are implemented: first come first served, round robin
//! with a fixed quantum, and a multi level feedback priority scheduler
//! ("WPS") with per level quanta and randomized I/O bound behaviour.
//!

use std::num::NonZeroUsize;

mod schedulers;

pub use schedulers::{FcfsScheduler, FeedbackScheduler, RoundRobinScheduler};

mod scheduler;
pub use crate::scheduler::{Scheduler, Simulation};

mod common_types;
pub use crate::common_types::{clamp_level, LevelQuantums, Timestamp, MAX_LEVEL, MIN_LEVEL};

mod process;
pub use crate::process::{ProcessRecord, ProcessSpec};

mod gantt;
pub use crate::gantt::{GanttSegment, GanttTrace};

mod metrics;
pub use crate::metrics::apply_metrics;

mod sampler;
pub use crate::sampler::{
    IoSampler, RandomIoSampler, ScriptedSampler, IO_BOUND_PROBABILITY,
};

mod error;
pub use crate::error::SchedulerError;

mod common_funcs;

/// Returns a structure that implements the `Scheduler` trait with a first
/// come first served policy.
pub fn fcfs() -> impl Scheduler {
    FcfsScheduler::new()
}

/// Returns a structure that implements the `Scheduler` trait with a round
/// robin scheduler policy
///
/// * `quantum` - the time quanta that a process can run before it is
///   preempted
pub fn round_robin(quantum: NonZeroUsize) -> impl Scheduler {
    RoundRobinScheduler::new(quantum)
}

/// Returns a structure that implements the `Scheduler` trait with a multi
/// level feedback priority policy, drawing I/O behaviour from an entropy
/// seeded generator
///
/// * `quantums` - the time quanta granted per dispatch at each priority
///   level
pub fn feedback_priority(quantums: LevelQuantums) -> impl Scheduler {
    FeedbackScheduler::new(quantums, RandomIoSampler::from_entropy())
}

/// Returns the feedback priority scheduler with an explicit I/O behaviour
/// source, for reproducible simulations
///
/// * `quantums` - the time quanta granted per dispatch at each priority
///   level
/// * `sampler` - source of the per dispatch I/O behaviour draw
pub fn feedback_priority_with_sampler<S: IoSampler>(
    quantums: LevelQuantums,
    sampler: S,
) -> impl Scheduler {
    FeedbackScheduler::new(quantums, sampler)
}
