//! Polling coordinator: decides, per inbound poll, between cache and upstream.
//!
//! ## Design
//!
//! - One job per coordinator; its [`PollState`] sits behind a single async mutex
//! - The mutex is held across the upstream fetch, so at most one fetch is in flight
//! - Polls inside the eligibility window are answered from cache
//! - Only a genuine `pending` answer advances the backoff; transport failures
//!   leave the schedule alone and are retried on the next poll
//! - A failed fetch once `max_retries` fetches have been made ends the sequence
//!   with an error; `pending` answers never do

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use vtsim_core::{JobStatus, SequenceId};

use crate::backoff::BackoffScheduler;
use crate::config::{ConfigError, PollerConfig};
use crate::source::{FetchError, StatusSource};
use crate::state::{PollSnapshot, PollState};

/// Error surfaced to the caller of [`PollingCoordinator::handle_poll`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PollError {
    /// The sequence used up its fetch budget without a terminal status.
    #[error("max retries reached ({attempts} upstream attempts)")]
    RetryCeilingExceeded { attempts: u32, sequence: SequenceId },
}

/// Stateful front for one long-running upstream job.
pub struct PollingCoordinator {
    config: PollerConfig,
    source: Arc<dyn StatusSource>,
    state: Mutex<PollState>,
}

impl std::fmt::Debug for PollingCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollingCoordinator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PollingCoordinator {
    pub fn new(config: PollerConfig, source: Arc<dyn StatusSource>) -> Result<Self, ConfigError> {
        config.validate()?;

        let backoff = match config.jitter_seed {
            Some(seed) => BackoffScheduler::seeded(config.initial_delay, config.max_delay, seed),
            None => BackoffScheduler::new(config.initial_delay, config.max_delay),
        };

        Ok(Self {
            config,
            source,
            state: Mutex::new(PollState::new(backoff)),
        })
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Answer one inbound poll.
    ///
    /// Starts a new sequence if none is active, serves the cached status while
    /// inside the eligibility window, and otherwise makes exactly one upstream
    /// fetch bounded by the configured timeout.
    pub async fn handle_poll(&self) -> Result<JobStatus, PollError> {
        let mut state = self.state.lock().await;
        let now = Instant::now();

        if !state.pending {
            let sequence = state.start_sequence(now);
            info!(%sequence, "starting new polling sequence");
        }
        let sequence = state.sequence;

        if state.in_cache_window(now) {
            debug!(
                %sequence,
                next_request_in_ms = (state.next_eligible - now).as_millis() as u64,
                "serving cached status"
            );
            return Ok(cached(&state));
        }

        let attempt = state.begin_attempt();
        let timeout = self.config.timeout;
        let fetched = match tokio::time::timeout(timeout, self.source.fetch(timeout)).await {
            Ok(res) => res,
            Err(_) => Err(FetchError::Timeout(timeout)),
        };

        match fetched {
            Err(err) => {
                warn!(%sequence, attempt, error = %err, "error fetching status");
                if state.retries_exhausted(self.config.max_retries) {
                    state.mark_exhausted();
                    error!(%sequence, attempt, "max retries reached");
                    return Err(PollError::RetryCeilingExceeded {
                        attempts: attempt,
                        sequence,
                    });
                }
            }
            Ok(JobStatus::Pending) => {
                info!(%sequence, attempt, status = "pending", "received status");
                let delay = state.mark_pending(Instant::now());
                info!(%sequence, attempt, delay_ms = delay.as_millis() as u64, "next attempt scheduled");
            }
            Ok(status) => {
                info!(%sequence, attempt, %status, "received final status");
                state.mark_finished(status);
            }
        }

        Ok(cached(&state))
    }

    /// Diagnostic copy of the current state.
    pub async fn snapshot(&self) -> PollSnapshot {
        let state = self.state.lock().await;
        state.snapshot(Instant::now())
    }
}

fn cached(state: &PollState) -> JobStatus {
    // Unset only exists before the first sequence starts.
    state.status.job_status().unwrap_or(JobStatus::Pending)
}
