//! Simulated translation job served over HTTP
//!
//! Stands in for the real translation backend: it reports `pending` until a
//! configured delay has elapsed since it was created, then settles on
//! `completed` or, with a configured probability, `error`.

use axum::{extract::State, routing::get, Json, Router};
use rand::Rng;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::Instant;
use crate::error::{ClientError, Result};
use crate::status::JobStatus;

/// Default time the job stays pending
pub const DEFAULT_JOB_DELAY: Duration = Duration::from_secs(10);
/// Default probability that a finished job reports an error
pub const DEFAULT_ERROR_CHANCE: f64 = 0.1;

/// Simulated job configuration
#[derive(Debug, Clone, PartialEq)]
pub struct JobConfig {
    /// How long after start the job keeps reporting `pending`
    pub delay: Duration,
    /// Probability in `[0, 1]` that each post-delay query reports `error`
    pub error_chance: f64,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_JOB_DELAY,
            error_chance: DEFAULT_ERROR_CHANCE,
        }
    }
}

impl JobConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.error_chance) {
            return Err(ClientError::invalid_config(format!(
                "error_chance must be within [0, 1], got {}",
                self.error_chance
            )));
        }
        Ok(())
    }
}

/// Body of `GET /status`
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct StatusReply {
    pub result: JobStatus,
}

/// A job whose progress depends only on elapsed time and chance
#[derive(Debug)]
pub struct SimulatedJob {
    config: JobConfig,
    started_at: Instant,
}

impl SimulatedJob {
    /// Starts the job clock now
    pub fn new(config: JobConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            started_at: Instant::now(),
        })
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// Status reported right now, drawing a fresh random number once the job is past its delay
    pub fn current_status(&self) -> JobStatus {
        let roll = rand::thread_rng().gen::<f64>();
        self.status_at(self.started_at.elapsed(), roll)
    }

    /// Status for a given elapsed time and a random roll in `[0, 1)`
    pub fn status_at(&self, elapsed: Duration, roll: f64) -> JobStatus {
        if elapsed < self.config.delay {
            JobStatus::Pending
        } else if roll < self.config.error_chance {
            JobStatus::Error
        } else {
            JobStatus::Completed
        }
    }
}

/// GET /status
async fn get_status(State(job): State<Arc<SimulatedJob>>) -> Json<StatusReply> {
    let result = job.current_status();
    log::debug!("Serving status {}", result);
    Json(StatusReply { result })
}

/// Creates the router exposing the job's status endpoint
pub fn create_router(job: SimulatedJob) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .with_state(Arc::new(job))
}

/// Serves `job` on `listener` until `shutdown` resolves
///
/// # Example
///
/// ```rust,no_run
/// use translation_status_client::server::{serve, JobConfig, SimulatedJob};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
/// let job = SimulatedJob::new(JobConfig::default())?;
/// serve(listener, job, async {
///     let _ = tokio::signal::ctrl_c().await;
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve<F>(listener: TcpListener, job: SimulatedJob, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    log::info!(
        "Simulated translation job listening on {} (delay {:?}, error chance {})",
        listener.local_addr()?,
        job.config.delay,
        job.config.error_chance
    );

    axum::serve(listener, create_router(job))
        .with_graceful_shutdown(shutdown)
        .await?;

    log::info!("Simulated translation job stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(delay_secs: u64, error_chance: f64) -> SimulatedJob {
        SimulatedJob::new(JobConfig {
            delay: Duration::from_secs(delay_secs),
            error_chance,
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = JobConfig::default();
        assert_eq!(config.delay, Duration::from_secs(10));
        assert_eq!(config.error_chance, 0.1);
    }

    #[test]
    fn test_rejects_out_of_range_error_chance() {
        for chance in [-0.1, 1.5, f64::NAN] {
            let config = JobConfig {
                delay: Duration::from_secs(1),
                error_chance: chance,
            };
            assert!(SimulatedJob::new(config).is_err(), "chance {}", chance);
        }
    }

    #[test]
    fn test_pending_before_delay() {
        let job = job(10, 0.5);
        assert_eq!(job.status_at(Duration::ZERO, 0.0), JobStatus::Pending);
        assert_eq!(job.status_at(Duration::from_millis(9_999), 0.99), JobStatus::Pending);
    }

    #[test]
    fn test_after_delay_depends_on_roll() {
        let job = job(10, 0.1);
        let elapsed = Duration::from_secs(10);
        assert_eq!(job.status_at(elapsed, 0.05), JobStatus::Error);
        assert_eq!(job.status_at(elapsed, 0.1), JobStatus::Completed);
        assert_eq!(job.status_at(elapsed, 0.9), JobStatus::Completed);
    }

    #[test]
    fn test_certain_outcomes() {
        assert_eq!(job(0, 0.0).current_status(), JobStatus::Completed);
        assert_eq!(job(0, 1.0).current_status(), JobStatus::Error);
    }

    #[test]
    fn test_status_reply_shape() {
        let body = serde_json::to_value(StatusReply { result: JobStatus::Pending }).unwrap();
        assert_eq!(body, serde_json::json!({"result": "pending"}));
    }
}
