//! Poller implementation: query, classify, back off, repeat

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use crate::error::Result;
use crate::status::{HttpStatusSource, StatusSource};
use super::{PollConfig, PollOutcome};

/// Tracks one job until it reaches a terminal state or the retry budget runs out
pub struct Poller<S> {
    config: PollConfig,
    source: S,
}

impl Poller<HttpStatusSource> {
    /// Creates a poller that queries `{config.base_url}/status` over HTTP
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use translation_status_client::poller::{PollConfig, Poller};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let poller = Poller::http(PollConfig::new("http://127.0.0.1:5000"))?;
    /// let outcome = poller.poll_status().await;
    /// println!("Final status: {}", outcome);
    /// # Ok(())
    /// # }
    /// ```
    pub fn http(config: PollConfig) -> Result<Self> {
        config.validate()?;
        let source = HttpStatusSource::new(&config.base_url)?;
        Self::new(config, source)
    }
}

impl<S: StatusSource> Poller<S> {
    /// Creates a poller over any status source, validating `config` first
    pub fn new(config: PollConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Polls the job until it completes, fails, or `max_retries` queries
    /// have all come back pending.
    ///
    /// Never fails: network problems, malformed responses and an exhausted
    /// retry budget all end up as [`PollOutcome::Error`].
    pub async fn poll_status(&self) -> PollOutcome {
        self.poll_status_with_cancel(CancellationToken::new()).await
    }

    /// Same as [`poll_status`](Self::poll_status), but returns
    /// [`PollOutcome::Canceled`] as soon as `token` fires between queries or
    /// during a backoff sleep. A query already in flight is allowed to finish.
    pub async fn poll_status_with_cancel(&self, token: CancellationToken) -> PollOutcome {
        let mut attempt = 0;
        let mut delay = self.config.initial_delay;

        while attempt < self.config.max_retries {
            if token.is_cancelled() {
                log::info!("Polling canceled before attempt {}", attempt + 1);
                return PollOutcome::Canceled;
            }

            let status = self.source.query().await;
            if let Some(outcome) = PollOutcome::from_terminal(status) {
                log::info!("Final status after {} attempt(s): {}", attempt + 1, outcome);
                return outcome;
            }

            log::info!("Status: {}. Retrying in {:?}...", status, delay);
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    log::info!("Polling canceled while waiting to retry");
                    return PollOutcome::Canceled;
                }
                _ = sleep(delay) => {}
            }

            delay = self.config.next_delay(delay);
            attempt += 1;
        }

        log::warn!(
            "Job still pending after {} attempt(s), giving up",
            self.config.max_retries
        );
        PollOutcome::Error
    }
}
