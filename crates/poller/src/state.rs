//! Per-job polling state and its transitions.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::Instant;

use vtsim_core::{JobStatus, SequenceId};

use crate::backoff::BackoffScheduler;

/// Last known status of the tracked job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PollStatus {
    /// No sequence has started yet
    Unset,
    Pending,
    Completed,
    Error,
    /// Retry ceiling hit before a terminal status
    MaxRetriesExceeded,
}

impl PollStatus {
    /// Caller-visible form, if there is one.
    pub fn job_status(&self) -> Option<JobStatus> {
        match self {
            PollStatus::Pending => Some(JobStatus::Pending),
            PollStatus::Completed => Some(JobStatus::Completed),
            PollStatus::Error => Some(JobStatus::Error),
            PollStatus::Unset | PollStatus::MaxRetriesExceeded => None,
        }
    }
}

impl From<JobStatus> for PollStatus {
    fn from(value: JobStatus) -> Self {
        match value {
            JobStatus::Pending => PollStatus::Pending,
            JobStatus::Completed => PollStatus::Completed,
            JobStatus::Error => PollStatus::Error,
        }
    }
}

/// State of the single job tracked by a coordinator.
///
/// Owned by the coordinator and only touched under its lock.
#[derive(Debug)]
pub struct PollState {
    pub(crate) status: PollStatus,
    pub(crate) pending: bool,
    pub(crate) attempt: u32,
    pub(crate) current_delay: Duration,
    pub(crate) next_eligible: Instant,
    pub(crate) last_request_at: Option<DateTime<Utc>>,
    pub(crate) sequence: SequenceId,
    pub(crate) backoff: BackoffScheduler,
}

impl PollState {
    pub fn new(backoff: BackoffScheduler) -> Self {
        Self {
            status: PollStatus::Unset,
            pending: false,
            attempt: 0,
            current_delay: Duration::ZERO,
            next_eligible: Instant::now(),
            last_request_at: None,
            sequence: SequenceId::new(),
            backoff,
        }
    }

    /// Rearm for a new job: reset counters and make the first fetch due now.
    pub fn start_sequence(&mut self, now: Instant) -> SequenceId {
        let sequence = SequenceId::new();
        self.pending = true;
        self.status = PollStatus::Pending;
        self.attempt = 0;
        self.current_delay = self.backoff.initial_delay();
        self.next_eligible = now;
        self.sequence = sequence;
        sequence
    }

    /// Whether polls at `now` must be served from cache.
    pub fn in_cache_window(&self, now: Instant) -> bool {
        self.pending && now < self.next_eligible
    }

    /// Count an upstream fetch about to be made.
    pub fn begin_attempt(&mut self) -> u32 {
        self.attempt += 1;
        self.last_request_at = Some(Utc::now());
        self.attempt
    }

    pub fn retries_exhausted(&self, max_retries: u32) -> bool {
        self.attempt >= max_retries
    }

    /// Upstream still pending: advance the backoff and push out the next fetch.
    pub fn mark_pending(&mut self, now: Instant) -> Duration {
        self.status = PollStatus::Pending;
        self.current_delay = self.backoff.next_delay(self.current_delay);
        self.next_eligible = now + self.current_delay;
        self.current_delay
    }

    /// Upstream reported `completed` or `error`.
    pub fn mark_finished(&mut self, status: JobStatus) {
        self.status = status.into();
        self.pending = false;
    }

    pub fn mark_exhausted(&mut self) {
        self.status = PollStatus::MaxRetriesExceeded;
        self.pending = false;
    }

    pub fn snapshot(&self, now: Instant) -> PollSnapshot {
        PollSnapshot {
            status: self.status,
            pending: self.pending,
            attempt: self.attempt,
            current_delay_ms: self.current_delay.as_millis() as u64,
            in_cache_window: self.in_cache_window(now),
            sequence: self.sequence,
            last_request_at: self.last_request_at,
        }
    }
}

/// Point-in-time copy of [`PollState`] for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollSnapshot {
    pub status: PollStatus,
    pub pending: bool,
    pub attempt: u32,
    pub current_delay_ms: u64,
    pub in_cache_window: bool,
    pub sequence: SequenceId,
    pub last_request_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PollState {
        PollState::new(BackoffScheduler::seeded(
            Duration::from_millis(100),
            Duration::from_secs(1),
            11,
        ))
    }

    #[test]
    fn starts_unset_and_idle() {
        let s = state();
        let snap = s.snapshot(Instant::now());
        assert_eq!(snap.status, PollStatus::Unset);
        assert!(!snap.pending);
        assert_eq!(snap.attempt, 0);
        assert!(snap.last_request_at.is_none());
    }

    #[test]
    fn start_sequence_resets_counters() {
        let mut s = state();
        let now = Instant::now();
        let first = s.start_sequence(now);
        s.begin_attempt();
        s.mark_pending(now);
        s.begin_attempt();
        s.mark_finished(JobStatus::Completed);

        let second = s.start_sequence(now);
        assert_ne!(first, second);
        assert_eq!(s.status, PollStatus::Pending);
        assert!(s.pending);
        assert_eq!(s.attempt, 0);
        assert_eq!(s.current_delay, Duration::from_millis(100));
        assert!(!s.in_cache_window(now));
    }

    #[test]
    fn mark_pending_opens_a_cache_window() {
        let mut s = state();
        let now = Instant::now();
        s.start_sequence(now);
        s.begin_attempt();

        let delay = s.mark_pending(now);
        assert!(delay >= Duration::from_millis(100));
        assert!(delay < Duration::from_millis(200));
        assert!(s.in_cache_window(now));
        assert!(!s.in_cache_window(now + delay));
    }

    #[test]
    fn terminal_outcomes_end_the_sequence() {
        let mut s = state();
        s.start_sequence(Instant::now());
        s.mark_finished(JobStatus::Error);
        assert!(!s.pending);
        assert_eq!(s.status, PollStatus::Error);

        s.start_sequence(Instant::now());
        s.mark_exhausted();
        assert!(!s.pending);
        assert_eq!(s.status, PollStatus::MaxRetriesExceeded);
        assert_eq!(s.status.job_status(), None);
    }

    #[test]
    fn begin_attempt_stamps_last_request() {
        let mut s = state();
        s.start_sequence(Instant::now());
        assert_eq!(s.begin_attempt(), 1);
        assert_eq!(s.begin_attempt(), 2);
        assert!(s.last_request_at.is_some());
        assert!(s.retries_exhausted(2));
        assert!(!s.retries_exhausted(3));
    }
}
