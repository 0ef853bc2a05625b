//! Plumbing shared by every engine: input validation, arrival ordering and
//! clock driven admission.

use std::collections::VecDeque;

use crate::common_types::Timestamp;
use crate::error::SchedulerError;
use crate::process::{ProcessRecord, ProcessSpec};

/// Rejects inputs no engine can schedule.
pub(crate) fn validate(processes: &[ProcessSpec]) -> Result<(), SchedulerError> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyProcessList);
    }

    for spec in processes {
        if spec.burst == 0 {
            return Err(SchedulerError::ZeroBurst {
                id: spec.id.clone(),
            });
        }
    }

    Ok(())
}

/// Fresh records in arrival order, ties broken by original input order.
pub(crate) fn records_by_arrival(processes: &[ProcessSpec]) -> Vec<ProcessRecord> {
    let mut records: Vec<ProcessRecord> =
        processes.iter().map(ProcessRecord::from_spec).collect();
    records.sort_by_key(|record| record.arrival);
    records
}

/// Hands processes to the ready side once the clock reaches their arrival.
pub(crate) struct ArrivalCursor {
    pending: VecDeque<ProcessRecord>,
}

impl ArrivalCursor {
    /// * `records` - simulation records, already sorted by arrival
    pub(crate) fn new(records: Vec<ProcessRecord>) -> ArrivalCursor {
        ArrivalCursor {
            pending: records.into(),
        }
    }

    /// Removes and returns every pending process with `arrival <= now`,
    /// in arrival order.
    pub(crate) fn admit_until(&mut self, now: Timestamp) -> Vec<ProcessRecord> {
        let mut admitted = Vec::new();

        while self
            .pending
            .front()
            .is_some_and(|record| record.arrival <= now)
        {
            if let Some(record) = self.pending.pop_front() {
                admitted.push(record);
            }
        }

        admitted
    }

    /// Arrival of the next pending process, if any.
    pub(crate) fn next_arrival(&self) -> Option<Timestamp> {
        self.pending.front().map(|record| record.arrival)
    }
}
