//! Tracing initialization for the component.
//!
//! All modules log through `tracing` spans and events; this module wires up a
//! subscriber so those logs go somewhere when the component runs standalone
//! (the demo binary). Embedding hosts that install their own subscriber can
//! skip this entirely.
//!
//! # Configuration
//!
//! The filter level is resolved from, in priority order:
//! 1. The `RUST_LOG` environment variable
//! 2. The `trace_level` configuration field
//! 3. Default: `"info"`

use tracing_subscriber::{fmt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber from configuration.
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
/// Output goes to stderr so the demo binary's stdout stays clean for results.
///
/// # Example
///
/// ```
/// use fuzzbox::{observability, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// observability::init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
