//! Simulator configuration.

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(10);
pub const DEFAULT_ERROR_RATE: u8 = 20;

/// How the simulated job behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatorConfig {
    /// Time before the job reports a final status
    pub delay: Duration,
    /// Probability (percent) that the final status is `error`
    pub error_rate: u8,
    /// Fixed RNG seed (tests); `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            error_rate: DEFAULT_ERROR_RATE,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Build from raw values, replacing out-of-range ones with defaults.
    pub fn sanitized(delay: Duration, error_rate: i64) -> Self {
        let delay = if delay.is_zero() {
            warn!(?delay, default = ?DEFAULT_DELAY, "invalid delay, using default");
            DEFAULT_DELAY
        } else {
            delay
        };

        let error_rate = match u8::try_from(error_rate) {
            Ok(rate) if rate <= 100 => rate,
            _ => {
                warn!(error_rate, default = DEFAULT_ERROR_RATE, "invalid error rate, using default");
                DEFAULT_ERROR_RATE
            }
        };

        Self {
            delay,
            error_rate,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
