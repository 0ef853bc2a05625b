//! Randomness seam for the feedback policy's simulated I/O.
//!
//! The single probability draw per dispatch is the only non determinism in
//! the whole simulator, so it lives behind an injectable trait instead of
//! an ambient generator.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability that a dispatch behaves I/O bound.
pub const IO_BOUND_PROBABILITY: f64 = 0.3;

/// Decides, one draw per dispatch, whether the running process behaves
/// I/O bound and hands the CPU back early.
pub trait IoSampler {
    fn io_bound(&mut self) -> bool;
}

/// Production sampler backed by a seedable generator.
pub struct RandomIoSampler<R: Rng> {
    rng: R,
    probability: f64,
}

impl RandomIoSampler<StdRng> {
    /// Sampler seeded from the thread generator.
    pub fn from_entropy() -> RandomIoSampler<StdRng> {
        RandomIoSampler::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Sampler with a fixed seed, for reproducible simulations.
    pub fn seeded(seed: u64) -> RandomIoSampler<StdRng> {
        RandomIoSampler::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomIoSampler<R> {
    pub fn with_rng(rng: R) -> RandomIoSampler<R> {
        RandomIoSampler {
            rng,
            probability: IO_BOUND_PROBABILITY,
        }
    }
}

impl<R: Rng> IoSampler for RandomIoSampler<R> {
    fn io_bound(&mut self) -> bool {
        self.rng.random::<f64>() < self.probability
    }
}

/// Replays a fixed outcome sequence, then reports CPU bound forever.
///
/// Meant for tests and demos that need an exact trace out of the feedback
/// policy.
pub struct ScriptedSampler {
    outcomes: VecDeque<bool>,
}

impl ScriptedSampler {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> ScriptedSampler {
        ScriptedSampler {
            outcomes: outcomes.into_iter().collect(),
        }
    }

    /// Sampler that never reports I/O bound behaviour.
    pub fn cpu_bound() -> ScriptedSampler {
        ScriptedSampler::new([])
    }
}

impl IoSampler for ScriptedSampler {
    fn io_bound(&mut self) -> bool {
        self.outcomes.pop_front().unwrap_or(false)
    }
}
