//! Injectable sources of randomness for transition sampling.
//!
//! The model never constructs its own generator. Callers hand it a
//! [`Sampler`], which in production is a [`RandomSampler`] and in tests is
//! usually a [`FixedIndex`] or a [`ScriptedSampler`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Chooses an index into a non-empty candidate list.
pub trait Sampler {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: Sampler + ?Sized> Sampler for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<T: Sampler + ?Sized> Sampler for Box<T> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform sampler backed by a `rand` generator.
///
/// # Example
///
/// ```rust
/// use mimicry::core::{RandomSampler, Sampler};
///
/// let mut a = RandomSampler::seeded(7);
/// let mut b = RandomSampler::seeded(7);
/// let picks_a: Vec<usize> = (0..16).map(|_| a.pick(5)).collect();
/// let picks_b: Vec<usize> = (0..16).map(|_| b.pick(5)).collect();
/// assert_eq!(picks_a, picks_b);
/// assert!(picks_a.iter().all(|&i| i < 5));
/// ```
#[derive(Clone, Debug)]
pub struct RandomSampler<R = StdRng> {
    rng: R,
}

impl RandomSampler<StdRng> {
    /// Sampler seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sampler for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSampler<R> {
    /// Wrap an arbitrary generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Sampler for RandomSampler<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always picks the same index, clamped to the last candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl Sampler for FixedIndex {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Replays a script of indices, then picks 0 once the script runs out.
///
/// Each scripted index is reduced modulo the candidate count.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSampler {
    picks: VecDeque<usize>,
}

impl ScriptedSampler {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Indices not yet consumed.
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl Sampler for ScriptedSampler {
    fn pick(&mut self, len: usize) -> usize {
        match self.picks.pop_front() {
            Some(index) if len > 0 => index % len,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_index_clamps_to_last_candidate() {
        let mut sampler = FixedIndex(3);
        assert_eq!(sampler.pick(10), 3);
        assert_eq!(sampler.pick(2), 1);
        assert_eq!(sampler.pick(1), 0);
    }

    #[test]
    fn scripted_sampler_replays_then_defaults_to_zero() {
        let mut sampler = ScriptedSampler::new([1, 4, 2]);
        assert_eq!(sampler.pick(3), 1);
        assert_eq!(sampler.pick(3), 1);
        assert_eq!(sampler.pick(3), 2);
        assert_eq!(sampler.remaining(), 0);
        assert_eq!(sampler.pick(3), 0);
    }

    #[test]
    fn random_sampler_stays_in_range() {
        let mut sampler = RandomSampler::seeded(42);
        for len in 1..20 {
            for _ in 0..50 {
                assert!(sampler.pick(len) < len);
            }
        }
    }

    #[test]
    fn random_sampler_reaches_every_index() {
        let mut sampler = RandomSampler::seeded(9);
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[sampler.pick(4)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn mutable_reference_forwards() {
        fn pick_once<T: Sampler>(mut sampler: T, len: usize) -> usize {
            sampler.pick(len)
        }

        let mut inner = ScriptedSampler::new([2]);
        assert_eq!(pick_once(&mut inner, 5), 2);
        assert_eq!(inner.remaining(), 0);
    }

    #[test]
    fn boxed_sampler_forwards() {
        let mut boxed: Box<dyn Sampler> = Box::new(FixedIndex(1));
        assert_eq!(boxed.pick(4), 1);
    }
}
