//! Job status as seen on the wire.

use serde::{Deserialize, Serialize};

/// Status of the (simulated) translation job, as reported by the upstream.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Still running.
    Pending,
    /// Finished successfully.
    Completed,
    /// Finished with a failure.
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Completed => "completed",
            JobStatus::Error => "error",
        }
    }

    /// `completed` and `error` end a job; `pending` does not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Error)
    }
}

impl core::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of every `GET /status` response: `{"result": "<status>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub result: JobStatus,
}

impl StatusResponse {
    pub fn new(result: JobStatus) -> Self {
        Self { result }
    }
}

impl From<JobStatus> for StatusResponse {
    fn from(result: JobStatus) -> Self {
        Self::new(result)
    }
}
