//! Command-line flags for the `vtsim-simulator` binary.

use std::time::Duration;

use clap::Parser;
use tracing::warn;
use vtsim_observability::LogFormat;

use crate::config::{DEFAULT_DELAY, SimulatorConfig};

/// Simulated video translation backend.
#[derive(Debug, Clone, Parser)]
#[command(name = "vtsim-simulator", version)]
pub struct SimulatorArgs {
    /// Address the simulator listens on
    #[arg(long, env = "VTSIM_SIMULATOR_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Delay before returning the final status, in seconds
    #[arg(long, env = "VTSIM_DELAY", default_value_t = 10, allow_negative_numbers = true)]
    pub delay: i64,

    /// Probability of returning `error` instead of `completed` (0-100)
    #[arg(long = "error", env = "VTSIM_ERROR_RATE", default_value_t = 20, allow_negative_numbers = true)]
    pub error_rate: i64,

    /// Fixed seed for the error roll; random when unset
    #[arg(long, env = "VTSIM_SIMULATOR_SEED")]
    pub seed: Option<u64>,

    /// Log output format (json or pretty)
    #[arg(long, env = "VTSIM_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}

impl SimulatorArgs {
    /// Simulator config; invalid flag values are replaced by defaults (and logged).
    pub fn simulator_config(&self) -> SimulatorConfig {
        let delay = delay_from_secs(self.delay).unwrap_or_else(|| {
            warn!(delay = self.delay, default = ?DEFAULT_DELAY, "invalid delay, using default");
            DEFAULT_DELAY
        });

        let config = SimulatorConfig::sanitized(delay, self.error_rate);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Positive whole seconds only.
fn delay_from_secs(secs: i64) -> Option<Duration> {
    u64::try_from(secs)
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
