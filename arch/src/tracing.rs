//! Optional log subscriber setup for binaries and tests using this crate.
//!
//! The library itself only emits events through the `tracing` facade; nothing is printed unless
//! a subscriber is installed, either by the application or by [`init`].

use std::env;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub const LOGGING_LEVEL_ENV: &str = "X86_ARCH_LOGGING_LEVEL";
pub const LOGGING_FORMAT_ENV: &str = "X86_ARCH_LOGGING_FORMAT";

/// Installs a global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` if set, otherwise from `X86_ARCH_LOGGING_LEVEL`, otherwise
/// `info`. `X86_ARCH_LOGGING_FORMAT` selects `pretty` (default), `compact` or `json` output.
/// Fails if a global subscriber has already been installed.
pub fn init() -> Result<()> {
    let log_level = env::var(LOGGING_LEVEL_ENV).unwrap_or_else(|_| "info".to_string());
    let log_format = env::var(LOGGING_FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .try_init(),
        "compact" => tracing_subscriber::fmt()
            .compact()
            .with_target(true)
            .with_env_filter(env_filter)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(env_filter)
            .try_init(),
    };

    result.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
