//! Tracing subscriber setup.
//!
//! Output format follows the `logging.format` setting: `json` for machine
//! ingestion, anything else falls back to a human-readable format. `RUST_LOG`
//! overrides the configured level when set.

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place. This matters for integration tests, which share one process.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    let installed = if config.format == "json" {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.pretty().try_init()
    };

    if let Err(e) = installed {
        tracing::debug!("Subscriber already installed: {}", e);
    }
}
