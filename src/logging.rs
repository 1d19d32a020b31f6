//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a single fmt
//! subscriber on stderr so diagnostics never interleave with the demo's
//! stdout narration.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Build the filter from `directives`, falling back to the default level
/// when they do not parse.
pub fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_FILTER))
}

/// Install the stderr subscriber. Later calls are no-ops, and an already
/// installed global subscriber is left in place.
pub fn init_logging(directives: &str, ansi: bool) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let subscriber = tracing_subscriber::registry().with(build_filter(directives)).with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_ansi(ansi),
        );

        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already set, keeping it");
        }
    });
}
