//! Tracing bootstrap for the embedding shell.
//!
//! The core itself only emits `tracing` events; installing a subscriber is
//! the shell's call. Swallowed storage/network faults surface here at
//! `warn` — without a subscriber they are invisible, which is the designed
//! behavior for end users and the wrong behavior for development.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Initializes structured logging from `RUST_LOG`, falling back to the
/// configured default level for this crate. Call at most once per process.
pub fn init(config: &Config) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Cargo package name is hyphenated; tracing targets are not.
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
