use log::debug;

use crate::common_funcs::{records_by_arrival, validate};
use crate::common_types::Timestamp;
use crate::error::SchedulerError;
use crate::gantt::GanttTrace;
use crate::process::ProcessSpec;
use crate::scheduler::{Scheduler, Simulation};

/// First come first served: runs every process to completion in arrival
/// order, no preemption, no ready queue.
///
/// The simulation is fully deterministic. Idle time between a completion
/// and the next arrival is left as a gap in the trace.
#[derive(Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    pub fn new() -> FcfsScheduler {
        FcfsScheduler
    }
}

impl Scheduler for FcfsScheduler {
    fn simulate(&mut self, processes: &[ProcessSpec]) -> Result<Simulation, SchedulerError> {
        validate(processes)?;

        let mut records = records_by_arrival(processes);
        let mut gantt = GanttTrace::new();
        let mut clock = Timestamp::new(0);

        for record in records.iter_mut() {
            let start = clock.max(record.arrival);
            let end = start + record.burst;

            debug!(
                "fcfs: {} runs [{}, {})",
                record.id,
                start.get(),
                end.get()
            );

            gantt.record(&record.id, start, end);
            record.execute(record.burst);
            record.complete(end);
            clock = end;
        }

        Ok(Simulation::finish(records, gantt))
    }
}
