//! Polls a translation job until it finishes and logs the final status

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use translation_status_client::prelude::*;

#[derive(Parser)]
#[command(name = "translation-client")]
#[command(about = "Wait for a video translation job to finish", long_about = None)]
struct Cli {
    /// Base URL of the translation job
    #[arg(long, env = "TRANSLATION_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Maximum number of status queries
    #[arg(long, env = "TRANSLATION_MAX_RETRIES", default_value_t = 5)]
    max_retries: usize,

    /// Delay after the first pending status, in milliseconds
    #[arg(long, env = "TRANSLATION_INITIAL_DELAY_MS", default_value_t = 1000)]
    initial_delay_ms: u64,

    /// Multiplier applied to the delay after each pending status
    #[arg(long, env = "TRANSLATION_BACKOFF_FACTOR", default_value_t = 2.0)]
    backoff_factor: f64,

    /// Optional ceiling on a single delay, in milliseconds
    #[arg(long, env = "TRANSLATION_MAX_DELAY_MS")]
    max_delay_ms: Option<u64>,
}

impl Cli {
    fn poll_config(&self) -> PollConfig {
        let config = PollConfig::new(self.base_url.clone())
            .with_max_retries(self.max_retries)
            .with_initial_delay(Duration::from_millis(self.initial_delay_ms))
            .with_backoff_factor(self.backoff_factor);

        match self.max_delay_ms {
            Some(ms) => config.with_max_delay(Duration::from_millis(ms)),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let poller = Poller::http(cli.poll_config()).context("Failed to set up poller")?;

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupted, stopping");
            ctrl_c.cancel();
        }
    });

    let outcome = poller.poll_status_with_cancel(token).await;
    log::info!("Final status: {}", outcome);

    Ok(if outcome.is_completed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
