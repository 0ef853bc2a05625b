use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use crate::common_funcs::{records_by_arrival, validate, ArrivalCursor};
use crate::common_types::{LevelQuantums, Timestamp, MAX_LEVEL, MIN_LEVEL};
use crate::error::SchedulerError;
use crate::gantt::GanttTrace;
use crate::process::{ProcessRecord, ProcessSpec};
use crate::sampler::IoSampler;
use crate::scheduler::{Scheduler, Simulation};

/// Fraction of the quantum an I/O bound dispatch gets to keep.
const IO_BURST_FACTOR: f64 = 0.4;

/// Multi level feedback scheduler with per level quanta.
///
/// One FIFO ready queue per priority level, scanned highest first, round
/// robin among equals; a dispatched process always finishes its computed
/// run before the levels are re-evaluated. Each dispatch draws once from
/// the injected [`IoSampler`]: an I/O bound draw caps the slice at
/// `floor(0.4 * quantum) + 1`. A process that hands the CPU back before
/// consuming the full level quantum is promoted one level, one that burns
/// the whole slice is demoted one level.
///
/// A process entering the ready state for the first time is placed at its
/// clamped original priority; promotions and demotions accumulated later
/// are never erased by re-admission from the ready queue.
///
/// Low level processes can starve while higher queues stay busy. That is
/// a property of the policy itself, not a defect of the engine.
pub struct FeedbackScheduler<S: IoSampler> {
    quantums: LevelQuantums,
    sampler: S,
}

impl<S: IoSampler> FeedbackScheduler<S> {
    /// * `quantums` - quantum granted per dispatch at each level
    /// * `sampler` - source of the per dispatch I/O behaviour draw
    pub fn new(quantums: LevelQuantums, sampler: S) -> FeedbackScheduler<S> {
        FeedbackScheduler { quantums, sampler }
    }
}

fn enqueue(ready: &mut HashMap<u8, VecDeque<ProcessRecord>>, record: ProcessRecord) {
    ready.entry(record.level).or_default().push_back(record);
}

/// Pops the front of the highest non empty level queue.
fn dequeue(ready: &mut HashMap<u8, VecDeque<ProcessRecord>>) -> Option<ProcessRecord> {
    for level in (MIN_LEVEL..=MAX_LEVEL).rev() {
        if let Some(queue) = ready.get_mut(&level) {
            if let Some(record) = queue.pop_front() {
                return Some(record);
            }
        }
    }

    None
}

impl<S: IoSampler> Scheduler for FeedbackScheduler<S> {
    fn simulate(&mut self, processes: &[ProcessSpec]) -> Result<Simulation, SchedulerError> {
        validate(processes)?;

        let total = processes.len();
        let mut cursor = ArrivalCursor::new(records_by_arrival(processes));
        let mut ready: HashMap<u8, VecDeque<ProcessRecord>> = HashMap::new();
        let mut completed: Vec<ProcessRecord> = Vec::new();
        let mut gantt = GanttTrace::new();
        let mut clock = Timestamp::new(0);

        while completed.len() < total {
            for record in cursor.admit_until(clock) {
                trace!("wps: {} admitted at level {}", record.id, record.level);
                enqueue(&mut ready, record);
            }

            if let Some(mut record) = dequeue(&mut ready) {
                let full_quantum = self.quantums.get(record.level).get();
                let slice = if self.sampler.io_bound() {
                    (full_quantum as f64 * IO_BURST_FACTOR).floor() as usize + 1
                } else {
                    full_quantum
                };
                let run = slice.min(record.remaining_burst);

                let start = clock;
                clock = clock + run;
                record.execute(run);
                gantt.record(&record.id, start, clock);

                trace!(
                    "wps: {} ran [{}, {}) at level {}",
                    record.id,
                    start.get(),
                    clock.get(),
                    record.level
                );

                // Arrivals during the slice outrank the dispatched process.
                for arrived in cursor.admit_until(clock) {
                    enqueue(&mut ready, arrived);
                }

                if record.is_done() {
                    debug!("wps: {} completed at {}", record.id, clock.get());
                    record.complete(clock);
                    completed.push(record);
                } else {
                    // A short run means the process gave the CPU back early,
                    // whether naturally or because of the I/O cap.
                    if run < full_quantum {
                        record.promote();
                    } else {
                        record.demote();
                    }
                    enqueue(&mut ready, record);
                }
            } else if let Some(arrival) = cursor.next_arrival() {
                trace!("wps: idle until {}", arrival.get());
                clock = arrival;
            } else {
                break;
            }
        }

        Ok(Simulation::finish(completed, gantt))
    }
}
