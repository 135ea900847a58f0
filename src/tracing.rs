//! Logging setup.

use miette::{IntoDiagnostic, WrapErr};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Format, TracingConfig};

/// Initializes the global tracing subscriber.
///
/// Events are written to stderr so they never mix with the report printed on stdout. The filter
/// is read from `RUST_LOG`, falling back to the configured one.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_init(tracing: &TracingConfig) -> miette::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&tracing.filter));
    let base = tracing_subscriber::registry().with(filter);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let result = match tracing.format {
        Format::Json => base.with(stderr_layer.json()).try_init(),
        Format::Pretty => base.with(stderr_layer.pretty()).try_init(),
        Format::Compact => base.with(stderr_layer.compact()).try_init(),
    };

    result
        .into_diagnostic()
        .wrap_err("could not init registry")?;

    debug!("tracing initialized");

    Ok(())
}
