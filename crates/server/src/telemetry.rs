//! Tracing subscriber initialization.
//!
//! Installs a [`tracing_subscriber`] registry with an `fmt` layer and an
//! [`EnvFilter`]. `RUST_LOG` takes precedence over the configured filter so
//! operators can raise verbosity without editing the config file.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::TelemetryConfig;

/// Build the filter: `RUST_LOG` first, then the configured directives, then `info`.
pub fn env_filter(config: &TelemetryConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// Must be called once, before any tracing calls.
pub fn init(config: &TelemetryConfig) {
    let fmt_layer = tracing_subscriber::fmt::layer().with_ansi(config.ansi);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .init();
}

