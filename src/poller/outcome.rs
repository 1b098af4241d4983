//! Final verdict of one polling session

use crate::status::JobStatus;

/// Outcome of [`Poller::poll_status`](super::Poller::poll_status).
///
/// Exhausting the retry budget is reported as `Error`, the same as a job
/// that reported failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollOutcome {
    Completed,
    Error,
    /// Only produced by [`Poller::poll_status_with_cancel`](super::Poller::poll_status_with_cancel)
    Canceled,
}

impl PollOutcome {
    /// Maps a terminal job status to an outcome, `None` for `Pending`
    pub fn from_terminal(status: JobStatus) -> Option<Self> {
        if !status.is_terminal() {
            return None;
        }
        Some(match status {
            JobStatus::Completed => PollOutcome::Completed,
            _ => PollOutcome::Error,
        })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PollOutcome::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PollOutcome::Completed => "completed",
            PollOutcome::Error => "error",
            PollOutcome::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for PollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
