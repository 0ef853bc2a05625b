use crate::common_types::Timestamp;

/// One contiguous run of a process on the simulated CPU.
///
/// Always non empty: `start < end`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GanttSegment {
    pub id: String,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// Time ordered execution trace of a whole simulation.
///
/// Idle CPU time shows up as a gap between consecutive segments, never as
/// a segment of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GanttTrace {
    segments: Vec<GanttSegment>,
}

impl GanttTrace {
    pub fn new() -> GanttTrace {
        GanttTrace {
            segments: Vec::new(),
        }
    }

    /// Records an execution window. Zero length windows are dropped.
    pub(crate) fn record(&mut self, id: &str, start: Timestamp, end: Timestamp) {
        if start < end {
            self.segments.push(GanttSegment {
                id: id.to_owned(),
                start,
                end,
            });
        }
    }

    pub fn segments(&self) -> &[GanttSegment] {
        &self.segments
    }

    /// Total CPU busy time over the whole trace.
    pub fn busy_time(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| segment.end.get() - segment.start.get())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_windows_are_suppressed() {
        let mut trace = GanttTrace::new();
        trace.record("A", Timestamp::new(2), Timestamp::new(2));
        trace.record("A", Timestamp::new(2), Timestamp::new(5));

        assert_eq!(trace.len(), 1);
        assert_eq!(trace.segments()[0].start, Timestamp::new(2));
        assert_eq!(trace.segments()[0].end, Timestamp::new(5));
    }

    #[test]
    fn busy_time_ignores_idle_gaps() {
        let mut trace = GanttTrace::new();
        trace.record("A", Timestamp::new(0), Timestamp::new(3));
        trace.record("B", Timestamp::new(7), Timestamp::new(9));

        assert_eq!(trace.busy_time(), 5);
    }
}
