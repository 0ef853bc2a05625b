use crate::error::SchedulerError;
use crate::gantt::GanttTrace;
use crate::metrics::apply_metrics;
use crate::process::{ProcessRecord, ProcessSpec};

/// Outcome of one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    /// Completed records, annotated with turnaround and waiting time, in
    /// the policy's natural order (arrival order for FCFS, completion
    /// order for the preemptive policies).
    pub processes: Vec<ProcessRecord>,
    /// Execution timeline.
    pub gantt: GanttTrace,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
}

impl Simulation {
    /// Seals an engine run: annotates the completed records with their
    /// metrics and packs the averages next to the trace.
    pub(crate) fn finish(mut completed: Vec<ProcessRecord>, gantt: GanttTrace) -> Simulation {
        let (avg_turnaround, avg_waiting) = apply_metrics(&mut completed);

        Simulation {
            processes: completed,
            gantt,
            avg_turnaround,
            avg_waiting,
        }
    }
}

/// A scheduling policy, simulated over a fixed process set.
///
/// One call runs the whole workload to completion: every process is
/// dispatched until its remaining burst reaches zero, so scheduling itself
/// has no failure mode once the inputs validate. Implementations never
/// touch the caller's specs; each call works on private copies.
pub trait Scheduler {
    fn simulate(&mut self, processes: &[ProcessSpec]) -> Result<Simulation, SchedulerError>;
}
