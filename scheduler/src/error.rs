//! Error taxonomy of the simulator.
//!
//! Inputs are validated before any simulation starts; once they pass, every
//! engine runs to guaranteed completion and returns no partial results.

use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchedulerError {
    /// Invalid input: the caller handed over no processes at all.
    EmptyProcessList,
    /// Invalid input: a process requests no CPU time and could never be
    /// dispatched.
    ZeroBurst { id: String },
    /// Missing configuration: the feedback policy has no quantum for the
    /// given priority level.
    MissingLevelQuantum { level: u8 },
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::EmptyProcessList => {
                write!(f, "cannot simulate an empty process list")
            }
            SchedulerError::ZeroBurst { id } => {
                write!(f, "process `{id}` has a zero burst time")
            }
            SchedulerError::MissingLevelQuantum { level } => {
                write!(f, "no quantum configured for priority level {level}")
            }
        }
    }
}

impl Error for SchedulerError {}
