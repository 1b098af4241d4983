//! Runs a simulated translation job for the client to poll

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tokio::net::TcpListener;
use translation_status_client::server::{serve, JobConfig, SimulatedJob};

#[derive(Parser)]
#[command(name = "translation-server")]
#[command(about = "Simulated video translation job", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "TRANSLATION_BIND", default_value = "127.0.0.1:5000")]
    bind: String,

    /// Seconds the job stays pending
    #[arg(long, env = "TRANSLATION_DELAY_SECS", default_value_t = 10)]
    delay_secs: u64,

    /// Probability that the finished job reports an error
    #[arg(long, env = "TRANSLATION_ERROR_CHANCE", default_value_t = 0.1)]
    error_chance: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let job = SimulatedJob::new(JobConfig {
        delay: Duration::from_secs(cli.delay_secs),
        error_chance: cli.error_chance,
    })?;

    let listener = TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", cli.bind))?;

    serve(listener, job, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await?;

    Ok(())
}
