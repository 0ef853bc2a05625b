use crate::common_types::{clamp_level, Timestamp, MAX_LEVEL, MIN_LEVEL};

/// Caller owned description of a process to simulate.
///
/// The id is opaque: it labels table rows and Gantt segments and takes no
/// part in any ordering decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessSpec {
    pub id: String,
    pub arrival: usize,
    pub burst: usize,
    /// Initial priority level, only meaningful to the feedback policy.
    pub priority: u8,
}

impl ProcessSpec {
    /// Creates a spec with the default priority
    ///
    /// * `id` - display label, unique within a run
    /// * `arrival` - time unit at which the process becomes runnable
    /// * `burst` - total CPU time the process requires
    pub fn new(id: impl Into<String>, arrival: usize, burst: usize) -> ProcessSpec {
        ProcessSpec {
            id: id.into(),
            arrival,
            burst,
            priority: MIN_LEVEL,
        }
    }

    pub fn with_priority(mut self, priority: u8) -> ProcessSpec {
        self.priority = priority;
        self
    }
}

/// Per simulation process state.
///
/// Built fresh from a [`ProcessSpec`] on every engine invocation, so
/// repeated simulations over the same specs are side effect free. The
/// original burst survives in `burst` while `remaining_burst` is consumed;
/// metrics are computed off the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessRecord {
    pub id: String,
    pub arrival: Timestamp,
    pub burst: usize,
    pub remaining_burst: usize,
    /// Current priority level. Clamped from `original_priority` once, when
    /// the record is created for admission; promotions and demotions are
    /// never erased afterwards.
    pub level: u8,
    pub original_priority: u8,
    /// Set exactly once, when `remaining_burst` reaches zero.
    pub completion: Timestamp,
    pub turnaround: usize,
    pub waiting: usize,
}

impl ProcessRecord {
    pub(crate) fn from_spec(spec: &ProcessSpec) -> ProcessRecord {
        ProcessRecord {
            id: spec.id.clone(),
            arrival: Timestamp::new(spec.arrival),
            burst: spec.burst,
            remaining_burst: spec.burst,
            level: clamp_level(spec.priority),
            original_priority: spec.priority,
            completion: Timestamp::new(0),
            turnaround: 0,
            waiting: 0,
        }
    }

    /// Consumes `time` units of the remaining burst.
    pub(crate) fn execute(&mut self, time: usize) {
        debug_assert!(time <= self.remaining_burst);
        self.remaining_burst -= time;
    }

    pub(crate) fn is_done(&self) -> bool {
        self.remaining_burst == 0
    }

    pub(crate) fn complete(&mut self, at: Timestamp) {
        self.completion = at;
    }

    /// Rewards an I/O bound dispatch with a higher level, capped at the top.
    pub(crate) fn promote(&mut self) {
        self.level = (self.level + 1).min(MAX_LEVEL);
    }

    /// Penalizes a CPU bound dispatch with a lower level, capped at the
    /// bottom.
    pub(crate) fn demote(&mut self) {
        self.level = (self.level - 1).max(MIN_LEVEL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_start_with_the_full_burst() {
        let record = ProcessRecord::from_spec(&ProcessSpec::new("A", 3, 7));

        assert_eq!(record.arrival, Timestamp::new(3));
        assert_eq!(record.burst, 7);
        assert_eq!(record.remaining_burst, 7);
        assert_eq!(record.level, MIN_LEVEL);
    }

    #[test]
    fn admission_clamps_the_original_priority() {
        let record = ProcessRecord::from_spec(&ProcessSpec::new("A", 0, 1).with_priority(9));

        assert_eq!(record.level, MAX_LEVEL);
        assert_eq!(record.original_priority, 9);
    }

    #[test]
    fn feedback_moves_stay_inside_the_level_range() {
        let mut record = ProcessRecord::from_spec(&ProcessSpec::new("A", 0, 1).with_priority(3));
        record.promote();
        assert_eq!(record.level, MAX_LEVEL);

        record.demote();
        record.demote();
        record.demote();
        assert_eq!(record.level, MIN_LEVEL);
    }

    #[test]
    fn execution_consumes_the_remaining_burst() {
        let mut record = ProcessRecord::from_spec(&ProcessSpec::new("A", 0, 5));
        record.execute(2);
        assert_eq!(record.remaining_burst, 3);
        assert!(!record.is_done());

        record.execute(3);
        assert!(record.is_done());
        assert_eq!(record.burst, 5);
    }
}
