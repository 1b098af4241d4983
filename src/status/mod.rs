//! Job status values and the sources that report them

mod http;

pub use http::{HttpStatusSource, StatusResponse, DEFAULT_REQUEST_TIMEOUT};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Job status constants as they appear on the wire
pub const JOB_STATUS_PENDING: &str = "pending";
pub const JOB_STATUS_COMPLETED: &str = "completed";
pub const JOB_STATUS_ERROR: &str = "error";

/// Status of the remote translation job
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// The job is still running
    Pending,
    /// The job finished successfully
    Completed,
    /// The job failed, or its status could not be determined
    Error,
}

impl JobStatus {
    /// Maps a wire string to a status.
    ///
    /// Anything other than the three known values is coerced to [`JobStatus::Error`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use translation_status_client::status::JobStatus;
    ///
    /// assert_eq!(JobStatus::from_wire("pending"), JobStatus::Pending);
    /// assert_eq!(JobStatus::from_wire("finished"), JobStatus::Error);
    /// ```
    pub fn from_wire(value: &str) -> Self {
        match value {
            JOB_STATUS_PENDING => JobStatus::Pending,
            JOB_STATUS_COMPLETED => JobStatus::Completed,
            _ => JobStatus::Error,
        }
    }

    /// Returns the wire representation of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => JOB_STATUS_PENDING,
            JobStatus::Completed => JOB_STATUS_COMPLETED,
            JobStatus::Error => JOB_STATUS_ERROR,
        }
    }

    /// Whether polling stops on this status
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can report the current status of one remote job.
///
/// Implementations perform exactly one query per call and never fail:
/// transport and decoding problems are reported as [`JobStatus::Error`].
/// Retrying is the caller's business.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Queries the job once and returns what it reported
    async fn query(&self) -> JobStatus;
}

#[async_trait]
impl<S: StatusSource + ?Sized> StatusSource for &S {
    async fn query(&self) -> JobStatus {
        (**self).query().await
    }
}

#[async_trait]
impl<S: StatusSource + ?Sized> StatusSource for Box<S> {
    async fn query(&self) -> JobStatus {
        (**self).query().await
    }
}

#[async_trait]
impl<S: StatusSource + ?Sized> StatusSource for Arc<S> {
    async fn query(&self) -> JobStatus {
        (**self).query().await
    }
}
