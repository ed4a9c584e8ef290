//! Exponential backoff with jitter for upstream polling.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Computes the delay before the next upstream fetch.
///
/// The base doubles on every call (capped at `max_delay`) and the result is
/// drawn uniformly from `[base/2, base)`. The random source is owned by the
/// scheduler; build it with [`BackoffScheduler::seeded`] for reproducible
/// sequences.
#[derive(Debug, Clone)]
pub struct BackoffScheduler {
    initial_delay: Duration,
    max_delay: Duration,
    rng: StdRng,
}

impl BackoffScheduler {
    /// Scheduler seeded from OS entropy.
    pub fn new(initial_delay: Duration, max_delay: Duration) -> Self {
        Self::with_rng(initial_delay, max_delay, StdRng::from_entropy())
    }

    /// Scheduler with a deterministic random source.
    pub fn seeded(initial_delay: Duration, max_delay: Duration, seed: u64) -> Self {
        Self::with_rng(initial_delay, max_delay, StdRng::seed_from_u64(seed))
    }

    fn with_rng(initial_delay: Duration, max_delay: Duration, rng: StdRng) -> Self {
        Self {
            initial_delay,
            max_delay,
            rng,
        }
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Upper bound (exclusive) of the next delay for a given current delay.
    pub fn base_for(&self, current: Duration) -> Duration {
        if current.is_zero() {
            self.initial_delay.min(self.max_delay)
        } else {
            current.saturating_mul(2).min(self.max_delay)
        }
    }

    /// Next delay, in `[base/2, base)`.
    pub fn next_delay(&mut self, current: Duration) -> Duration {
        let base = self.base_for(current);
        let half = base / 2;

        let half_nanos = u64::try_from(half.as_nanos()).unwrap_or(u64::MAX);
        if half_nanos == 0 {
            return half;
        }

        let jitter = Duration::from_nanos(self.rng.gen_range(0..half_nanos));
        let total = half + jitter;

        debug!(
            base_ms = base.as_millis() as u64,
            half_ms = half.as_millis() as u64,
            jitter_ms = jitter.as_millis() as u64,
            total_ms = total.as_millis() as u64,
            "exponential backoff computed"
        );

        total
    }
}
