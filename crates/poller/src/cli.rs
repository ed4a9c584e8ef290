//! Command-line flags for the `vtsim-poller` binary.

use std::time::Duration;

use clap::Parser;
use vtsim_observability::LogFormat;

use crate::config::PollerConfig;

/// Polling gateway in front of the video translation upstream.
#[derive(Debug, Clone, Parser)]
#[command(name = "vtsim-poller", version)]
pub struct PollerArgs {
    /// Address the gateway listens on
    #[arg(long, env = "VTSIM_POLLER_LISTEN", default_value = "0.0.0.0:9090")]
    pub listen: String,

    /// Base URL of the upstream status server
    #[arg(long, env = "VTSIM_UPSTREAM_URL", default_value = "http://localhost:8080")]
    pub upstream_url: String,

    /// Delay before the second upstream fetch of a sequence, in milliseconds
    #[arg(long, env = "VTSIM_INITIAL_DELAY_MS", default_value_t = 500)]
    pub initial_delay_ms: u64,

    /// Backoff cap, in milliseconds
    #[arg(long, env = "VTSIM_MAX_DELAY_MS", default_value_t = 10_000)]
    pub max_delay_ms: u64,

    /// Upstream fetches allowed per polling sequence
    #[arg(long, env = "VTSIM_MAX_RETRIES", default_value_t = 20)]
    pub max_retries: u32,

    /// Timeout of a single upstream fetch, in milliseconds
    #[arg(long, env = "VTSIM_TIMEOUT_MS", default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// Log output format (json or pretty)
    #[arg(long, env = "VTSIM_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}

impl PollerArgs {
    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig::default()
            .with_initial_delay(Duration::from_millis(self.initial_delay_ms))
            .with_max_delay(Duration::from_millis(self.max_delay_ms))
            .with_max_retries(self.max_retries)
            .with_timeout(Duration::from_millis(self.timeout_ms))
    }
}
