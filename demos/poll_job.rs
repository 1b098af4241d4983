//! Starts a simulated job in-process and polls it to completion

use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use translation_status_client::poller::{PollConfig, Poller};
use translation_status_client::server::{serve, JobConfig, SimulatedJob};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);

    let job = SimulatedJob::new(JobConfig {
        delay: Duration::from_secs(3),
        error_chance: 0.1,
    })?;
    let shutdown = CancellationToken::new();
    let server_shutdown = shutdown.clone();
    let server = tokio::spawn(async move {
        serve(listener, job, async move { server_shutdown.cancelled().await }).await
    });

    println!("Polling simulated job at {}", base_url);
    let config = PollConfig::new(base_url)
        .with_max_retries(5)
        .with_initial_delay(Duration::from_millis(500));
    let poller = Poller::http(config)?;

    let outcome = poller.poll_status().await;
    println!("Final status: {}", outcome);

    shutdown.cancel();
    server.await??;
    Ok(())
}
