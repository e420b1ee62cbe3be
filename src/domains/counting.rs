//! Bernoulli counting process.
//!
//! Each interval performs n independent weighted coin flips and records the
//! number of successes: a direct Binomial(n, p) draw. For small p and large
//! n the counts approximate a Poisson distribution with mean n·p, which is
//! what the animated histogram makes visible.

use serde::{Deserialize, Serialize};

use crate::engine::rng::SimRng;
use crate::error::{SimError, SimResult};

/// Counts successes among a fixed number of independent Bernoulli trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialCounter {
    /// Success probability per trial.
    success_probability: f64,
    /// Number of trials per interval.
    trials: usize,
}

impl TrialCounter {
    /// Create a counter with success probability `p` over `trials` trials.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `p` is outside [0, 1] (or not finite),
    /// or if `trials` is zero.
    pub fn new(p: f64, trials: usize) -> SimResult<Self> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(SimError::invalid_argument(format!(
                "success probability {p} outside [0, 1]"
            )));
        }
        if trials == 0 {
            return Err(SimError::invalid_argument("trial count must be positive"));
        }
        Ok(Self {
            success_probability: p,
            trials,
        })
    }

    /// Success probability per trial.
    #[must_use]
    pub const fn success_probability(&self) -> f64 {
        self.success_probability
    }

    /// Number of trials per interval.
    #[must_use]
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// Expected count per interval, n·p.
    #[must_use]
    pub fn expected_count(&self) -> f64 {
        self.trials as f64 * self.success_probability
    }

    /// Run one interval: n independent uniform draws, counting those that
    /// fall below the success probability.
    #[must_use]
    pub fn count(&self, rng: &mut SimRng) -> u64 {
        let mut successes = 0;
        for _ in 0..self.trials {
            if rng.bernoulli(self.success_probability) {
                successes += 1;
            }
        }
        successes
    }
}

/// Strictly sequential repetition loop over a [`TrialCounter`].
#[derive(Debug, Clone, Copy)]
pub struct CountingProcess {
    counter: TrialCounter,
}

impl CountingProcess {
    /// Create a process around the given counter.
    #[must_use]
    pub const fn new(counter: TrialCounter) -> Self {
        Self { counter }
    }

    /// The underlying counter.
    #[must_use]
    pub const fn counter(&self) -> &TrialCounter {
        &self.counter
    }

    /// Run the counter `repetitions` times, appending each result to the
    /// history in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `repetitions` is zero.
    pub fn run(&self, repetitions: usize, rng: &mut SimRng) -> SimResult<CountHistory> {
        if repetitions == 0 {
            return Err(SimError::invalid_argument(
                "repetition count must be positive",
            ));
        }

        let mut history = CountHistory::with_capacity(repetitions);
        for _ in 0..repetitions {
            history.push(self.counter.count(rng));
        }
        Ok(history)
    }
}

/// Append-only sequence of per-interval counts.
///
/// The original experiment copied the whole result list after every interval
/// to replay its growth. A snapshot here is just a prefix view into the one
/// final sequence: snapshot k is `&counts[..k+1]`, identical in content to
/// the k-th copy without the redundant allocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountHistory {
    counts: Vec<u64>,
}

impl CountHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history with reserved capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: Vec::with_capacity(capacity),
        }
    }

    /// Append one interval's count.
    pub fn push(&mut self, count: u64) {
        self.counts.push(count);
    }

    /// All counts in arrival order.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of recorded intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no intervals have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Snapshot k: the state of the history after interval k, as a prefix of
    /// length k+1. Returns `None` past the end.
    #[must_use]
    pub fn snapshot(&self, k: usize) -> Option<&[u64]> {
        if k < self.counts.len() {
            Some(&self.counts[..=k])
        } else {
            None
        }
    }

    /// Iterate all snapshots in order: one frame per interval.
    pub fn frames(&self) -> impl Iterator<Item = &[u64]> {
        (0..self.counts.len()).map(move |k| &self.counts[..=k])
    }

    /// Sample mean of the counts.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.counts.is_empty() {
            return 0.0;
        }
        self.counts.iter().sum::<u64>() as f64 / self.counts.len() as f64
    }

    /// Largest recorded count.
    #[must_use]
    pub fn max(&self) -> Option<u64> {
        self.counts.iter().max().copied()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification test: counts never exceed the trial count, for any
        /// probability and seed.
        #[test]
        fn prop_count_bounded(
            p in 0.0f64..=1.0,
            trials in 1usize..500,
            seed in 0u64..u64::MAX,
        ) {
            let counter = TrialCounter::new(p, trials)
                .map_err(|_| TestCaseError::reject("counter"))?;
            let mut rng = SimRng::new(seed);
            prop_assert!(counter.count(&mut rng) <= trials as u64);
        }

        /// Falsification test: history length equals the repetition count and
        /// every snapshot is a prefix of the final sequence.
        #[test]
        fn prop_history_shape(
            repetitions in 1usize..100,
            seed in 0u64..u64::MAX,
        ) {
            let counter = TrialCounter::new(0.1, 20)
                .map_err(|_| TestCaseError::reject("counter"))?;
            let mut rng = SimRng::new(seed);
            let history = CountingProcess::new(counter)
                .run(repetitions, &mut rng)
                .map_err(|_| TestCaseError::reject("run"))?;

            prop_assert_eq!(history.len(), repetitions);
            for k in 0..repetitions {
                let snap = history.snapshot(k).ok_or_else(|| TestCaseError::fail("missing snapshot"))?;
                prop_assert_eq!(snap, &history.counts()[..=k]);
            }
        }
    }
}
