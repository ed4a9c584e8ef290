//! `vtsim-poller`: client-side polling front for a long-running upstream job.
//!
//! Callers poll `GET /status` as often as they like; the [`PollingCoordinator`]
//! decides when the upstream is actually contacted (exponential backoff with
//! jitter) and serves the last known status in between.

pub mod app;
pub mod backoff;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod source;
pub mod state;

pub use backoff::BackoffScheduler;
pub use config::{ConfigError, PollerConfig};
pub use coordinator::{PollError, PollingCoordinator};
pub use source::{FetchError, HttpStatusSource, StatusSource};
pub use state::{PollSnapshot, PollState, PollStatus};
