//! Structured logging for Pets Explorer.
//!
//! One subscriber shape in two output formats: human-readable lines for
//! local runs, JSON objects for log shippers. `RUST_LOG` selects the level
//! and defaults to `info`.

use std::io;
use tracing::Subscriber;
use tracing_subscriber::{fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync + 'static>;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Subscriber writing to `writer` in the format `config` selects.
fn subscriber<W>(config: &LoggingConfig, filter: EnvFilter, writer: W) -> BoxedSubscriber
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(writer);

    if config.json {
        Box::new(registry.with(layer.json()))
    } else {
        Box::new(registry.with(layer))
    }
}

/// Install the global subscriber in the configured format.
///
/// Panics if a global subscriber is already set.
///
/// # Example
/// ```no_run
/// use pets_core::{logging, LoggingConfig};
///
/// logging::init_from_config(&LoggingConfig { json: true });
/// tracing::info!(service = "pets-explorer", "Service started");
/// ```
pub fn init_from_config(config: &LoggingConfig) {
    subscriber(config, default_filter(), io::stdout).init();
}

/// Human-readable output on stdout.
pub fn init() {
    init_from_config(&LoggingConfig { json: false });
}

/// JSON output on stdout.
pub fn init_json() {
    init_from_config(&LoggingConfig { json: true });
}
