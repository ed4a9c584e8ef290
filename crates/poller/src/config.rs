//! Coordinator configuration.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Polling coordinator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollerConfig {
    /// Delay used when a sequence starts
    pub initial_delay: Duration,
    /// Backoff cap
    pub max_delay: Duration,
    /// Upstream fetches allowed per sequence
    pub max_retries: u32,
    /// Bound on a single upstream fetch
    pub timeout: Duration,
    /// Fixed jitter seed (tests); `None` seeds from OS entropy
    pub jitter_seed: Option<u64>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            max_retries: 20,
            timeout: Duration::from_secs(5),
            jitter_seed: None,
        }
    }
}

impl PollerConfig {
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_jitter_seed(mut self, seed: u64) -> Self {
        self.jitter_seed = Some(seed);
        self
    }

    /// Reject configurations that would break the coordinator's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_delay > self.max_delay {
            return Err(ConfigError::InitialDelayAboveMax {
                initial: self.initial_delay,
                max: self.max_delay,
            });
        }
        if self.max_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Invalid coordinator configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial delay {initial:?} exceeds max delay {max:?}")]
    InitialDelayAboveMax { initial: Duration, max: Duration },

    #[error("max retries must be at least 1")]
    ZeroRetries,

    #[error("upstream timeout must be non-zero")]
    ZeroTimeout,
}
