//! The three scheduling policies.
//!
//! Each engine lives in its own file and is re-exported here.

mod fcfs;
pub use fcfs::FcfsScheduler;

mod round_robin;
pub use round_robin::RoundRobinScheduler;

mod feedback;
pub use feedback::FeedbackScheduler;
