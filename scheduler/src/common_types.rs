use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::ops::Add;

use crate::error::SchedulerError;

/// Lowest priority level of the feedback policy.
pub const MIN_LEVEL: u8 = 1;
/// Highest priority level of the feedback policy.
pub const MAX_LEVEL: u8 = 3;

/// A point on the simulated clock, counted in CPU time units.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Timestamp(usize);

impl Timestamp {
    /// Creates a new Timestamp object
    ///
    /// * `time` - initial value of the Timestamp
    pub fn new(time: usize) -> Timestamp {
        Timestamp(time)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Add<usize> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: usize) -> Self::Output {
        Timestamp::new(self.0 + rhs)
    }
}

/// Forces a requested priority into the supported level range.
pub fn clamp_level(priority: u8) -> u8 {
    priority.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Time quantum granted per dispatch at each priority level.
///
/// Quanta are [`NonZeroUsize`], so a non-positive quantum cannot be
/// expressed at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelQuantums {
    quantums: [NonZeroUsize; (MAX_LEVEL - MIN_LEVEL + 1) as usize],
}

impl LevelQuantums {
    /// Creates the mapping from one quantum per level, lowest level first.
    pub fn new(level1: NonZeroUsize, level2: NonZeroUsize, level3: NonZeroUsize) -> LevelQuantums {
        LevelQuantums {
            quantums: [level1, level2, level3],
        }
    }

    /// Builds the mapping from a possibly partial `level -> quantum` table.
    ///
    /// * `map` - quantum per level; every level in `[MIN_LEVEL, MAX_LEVEL]`
    ///   must be present
    pub fn from_map(map: &HashMap<u8, NonZeroUsize>) -> Result<LevelQuantums, SchedulerError> {
        let mut quantums = [NonZeroUsize::MIN; (MAX_LEVEL - MIN_LEVEL + 1) as usize];

        for level in MIN_LEVEL..=MAX_LEVEL {
            match map.get(&level) {
                Some(quantum) => quantums[(level - MIN_LEVEL) as usize] = *quantum,
                None => return Err(SchedulerError::MissingLevelQuantum { level }),
            }
        }

        Ok(LevelQuantums { quantums })
    }

    /// Quantum granted to processes dispatched at `level`.
    pub fn get(&self, level: u8) -> NonZeroUsize {
        self.quantums[(clamp_level(level) - MIN_LEVEL) as usize]
    }
}
