//! Polling state machine for tracking one remote job

mod client;
mod config;
mod outcome;

pub use client::Poller;
pub use config::{
    next_delay, PollConfig, DEFAULT_BACKOFF_FACTOR, DEFAULT_INITIAL_DELAY, DEFAULT_MAX_RETRIES,
};
pub use outcome::PollOutcome;
