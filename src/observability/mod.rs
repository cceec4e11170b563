//! # Observability
//!
//! Tracing subscriber setup. Diagnostics go to stderr so stdout only carries
//! the progress lines the test harness watches for.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::constants::DEFAULT_LOG_FILTER;

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the default filter. Calling this twice is harmless;
/// the second subscriber is simply not installed.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already initialized: {}", e);
    }
}
