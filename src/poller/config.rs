//! Polling configuration

use std::time::Duration;
use url::Url;
use crate::error::{ClientError, Result};

/// Default number of status queries before giving up
pub const DEFAULT_MAX_RETRIES: usize = 5;
/// Default delay after the first pending status
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
/// Default multiplier applied to the delay after every pending status
pub const DEFAULT_BACKOFF_FACTOR: f64 = 2.0;

/// Poller configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PollConfig {
    /// Base URL of the job, `/status` is appended to it
    pub base_url: String,
    /// Upper bound on the number of status queries
    pub max_retries: usize,
    /// Sleep after the first pending status
    pub initial_delay: Duration,
    /// Multiplier for each following sleep, must be greater than one
    pub backoff_factor: f64,
    /// Optional ceiling on a single sleep. `None` lets the delay grow without bound.
    pub max_delay: Option<Duration>,
}

impl PollConfig {
    /// Creates a configuration with the default retry policy
    ///
    /// # Example
    ///
    /// ```rust
    /// use translation_status_client::poller::PollConfig;
    /// use std::time::Duration;
    ///
    /// let config = PollConfig::new("http://127.0.0.1:5000")
    ///     .with_max_retries(3)
    ///     .with_initial_delay(Duration::from_millis(500));
    ///
    /// assert_eq!(config.backoff_factor, 2.0);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: DEFAULT_INITIAL_DELAY,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            max_delay: None,
        }
    }

    /// Sets the maximum number of status queries, zero means none
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the sleep after the first pending status
    pub fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    /// Sets the multiplier applied to each following sleep
    pub fn with_backoff_factor(mut self, backoff_factor: f64) -> Self {
        self.backoff_factor = backoff_factor;
        self
    }

    /// Caps every sleep at `max_delay`
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = Some(max_delay);
        self
    }

    /// Checks every option against its allowed range
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::invalid_config("base_url must not be empty"));
        }
        Url::parse(&self.base_url)?;

        if self.initial_delay.is_zero() {
            return Err(ClientError::invalid_config("initial_delay must be positive"));
        }

        if !self.backoff_factor.is_finite() || self.backoff_factor <= 1.0 {
            return Err(ClientError::invalid_config(format!(
                "backoff_factor must be a finite number greater than 1, got {}",
                self.backoff_factor
            )));
        }

        if let Some(max_delay) = self.max_delay {
            if max_delay < self.initial_delay {
                return Err(ClientError::invalid_config(format!(
                    "max_delay ({:?}) is shorter than initial_delay ({:?})",
                    max_delay, self.initial_delay
                )));
            }
        }

        Ok(())
    }

    /// Sleep that follows `current` under this configuration
    pub fn next_delay(&self, current: Duration) -> Duration {
        next_delay(current, self.backoff_factor, self.max_delay)
    }
}

/// Multiplies `current` by `factor`, saturating at [`Duration::MAX`] and
/// clamping to `cap` when one is given.
pub fn next_delay(current: Duration, factor: f64, cap: Option<Duration>) -> Duration {
    let next = Duration::try_from_secs_f64(current.as_secs_f64() * factor).unwrap_or(Duration::MAX);
    match cap {
        Some(cap) => next.min(cap),
        None => next,
    }
}
