use std::collections::VecDeque;
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::common_funcs::{records_by_arrival, validate, ArrivalCursor};
use crate::common_types::Timestamp;
use crate::error::SchedulerError;
use crate::gantt::GanttTrace;
use crate::process::{ProcessRecord, ProcessSpec};
use crate::scheduler::{Scheduler, Simulation};

/// Round robin: a single FIFO ready queue and a fixed quantum.
///
/// A dispatched process runs for `min(quantum, remaining burst)` and is
/// preempted. Processes that arrive during that slice enter the queue
/// ahead of the preempted one; that ordering is a policy choice, not an
/// accident. When the queue drains while processes are still due, the
/// clock jumps straight to the next arrival.
pub struct RoundRobinScheduler {
    quantum: NonZeroUsize,
}

impl RoundRobinScheduler {
    /// * `quantum` - maximum contiguous CPU time granted per dispatch
    pub fn new(quantum: NonZeroUsize) -> RoundRobinScheduler {
        RoundRobinScheduler { quantum }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn simulate(&mut self, processes: &[ProcessSpec]) -> Result<Simulation, SchedulerError> {
        validate(processes)?;

        let total = processes.len();
        let mut cursor = ArrivalCursor::new(records_by_arrival(processes));
        let mut ready: VecDeque<ProcessRecord> = VecDeque::new();
        let mut completed: Vec<ProcessRecord> = Vec::new();
        let mut gantt = GanttTrace::new();
        let mut clock = Timestamp::new(0);

        while completed.len() < total {
            ready.extend(cursor.admit_until(clock));

            if let Some(mut record) = ready.pop_front() {
                let run = self.quantum.get().min(record.remaining_burst);

                let start = clock;
                clock = clock + run;
                record.execute(run);
                gantt.record(&record.id, start, clock);

                trace!("rr: {} ran [{}, {})", record.id, start.get(), clock.get());

                // Arrivals during the slice outrank the preempted process.
                ready.extend(cursor.admit_until(clock));

                if record.is_done() {
                    debug!("rr: {} completed at {}", record.id, clock.get());
                    record.complete(clock);
                    completed.push(record);
                } else {
                    ready.push_back(record);
                }
            } else if let Some(arrival) = cursor.next_arrival() {
                trace!("rr: idle until {}", arrival.get());
                clock = arrival;
            } else {
                break;
            }
        }

        Ok(Simulation::finish(completed, gantt))
    }
}
