//! The simulated long-running job.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::info;

use vtsim_core::JobStatus;

use crate::config::SimulatorConfig;

#[derive(Debug)]
struct JobInner {
    started_at: Instant,
    status: JobStatus,
    rng: StdRng,
}

/// One job whose status resolves after `delay`.
///
/// Every request observes the job; once a final status has been reported the
/// next observation starts a new job (timer reset, back to `pending`).
#[derive(Debug)]
pub struct SimulatedJob {
    config: SimulatorConfig,
    inner: Mutex<JobInner>,
}

impl SimulatedJob {
    pub fn new(config: SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            inner: Mutex::new(JobInner {
                started_at: Instant::now(),
                status: JobStatus::Pending,
                rng,
            }),
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Current status, advancing the simulation as a side effect.
    pub async fn observe(&self) -> JobStatus {
        let mut job = self.inner.lock().await;

        if job.status.is_terminal() {
            job.started_at = Instant::now();
            job.status = JobStatus::Pending;
            info!("new request received, resetting timer and status to pending");
        }

        if job.started_at.elapsed() >= self.config.delay {
            let roll: u8 = job.rng.gen_range(0..100);
            job.status = if roll < self.config.error_rate {
                JobStatus::Error
            } else {
                JobStatus::Completed
            };
        }

        info!(status = %job.status, "handled status request");
        job.status
    }
}
