//! # Translation Status Client
//!
//! Tracks a long-running video translation job by polling its `GET /status`
//! endpoint with exponential backoff until the job completes or fails.
//!
//! ## Features
//!
//! - **Poller**: bounded retries, multiplicative backoff, optional delay cap and cancellation
//! - **Status sources**: an HTTP source for production and a trait for plugging in others
//! - **Simulated job**: a small server that behaves like the real translation backend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use translation_status_client::poller::{PollConfig, PollOutcome, Poller};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PollConfig::new("http://127.0.0.1:5000")
//!         .with_max_retries(5)
//!         .with_initial_delay(Duration::from_secs(1))
//!         .with_backoff_factor(2.0);
//!
//!     let poller = Poller::http(config)?;
//!     match poller.poll_status().await {
//!         PollOutcome::Completed => println!("Translation finished"),
//!         outcome => println!("Translation did not finish: {}", outcome),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod poller;
pub mod server;
pub mod status;

pub use error::{ClientError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{ClientError, Result};
    pub use crate::poller::{PollConfig, PollOutcome, Poller};
    pub use crate::status::{HttpStatusSource, JobStatus, StatusSource};
    pub use tokio_util::sync::CancellationToken;
}
