//! Turnaround and waiting time computation.

use crate::process::ProcessRecord;

/// Annotates every completed record with its turnaround and waiting time
/// and returns the `(average turnaround, average waiting)` pair.
///
/// Pure and order preserving; running it twice over the same records gives
/// identical results. Waiting time is derived from the original burst, not
/// the remaining one. Callers guarantee `completed` is non empty.
pub fn apply_metrics(completed: &mut [ProcessRecord]) -> (f64, f64) {
    let mut total_turnaround = 0;
    let mut total_waiting = 0;

    for record in completed.iter_mut() {
        record.turnaround = record.completion.get() - record.arrival.get();
        record.waiting = record.turnaround - record.burst;

        total_turnaround += record.turnaround;
        total_waiting += record.waiting;
    }

    let count = completed.len() as f64;
    (total_turnaround as f64 / count, total_waiting as f64 / count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_types::Timestamp;
    use crate::process::ProcessSpec;

    fn completed(id: &str, arrival: usize, burst: usize, completion: usize) -> ProcessRecord {
        let mut record = ProcessRecord::from_spec(&ProcessSpec::new(id, arrival, burst));
        record.execute(burst);
        record.complete(Timestamp::new(completion));
        record
    }

    #[test]
    fn metrics_follow_the_definitions() {
        let mut records = vec![
            completed("A", 0, 5, 5),
            completed("B", 1, 3, 8),
            completed("C", 2, 1, 9),
        ];

        let (avg_turnaround, avg_waiting) = apply_metrics(&mut records);

        assert_eq!(records[0].turnaround, 5);
        assert_eq!(records[0].waiting, 0);
        assert_eq!(records[1].turnaround, 7);
        assert_eq!(records[1].waiting, 4);
        assert_eq!(records[2].turnaround, 7);
        assert_eq!(records[2].waiting, 6);

        assert!((avg_turnaround - 19.0 / 3.0).abs() < 1e-9);
        assert!((avg_waiting - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn metrics_are_idempotent() {
        let mut records = vec![completed("A", 0, 4, 9), completed("B", 2, 3, 12)];

        let first = apply_metrics(&mut records);
        let snapshot = records.clone();
        let second = apply_metrics(&mut records);

        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }
}
