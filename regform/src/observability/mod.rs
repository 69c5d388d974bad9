//! Observability (structured logging)
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and one fmt
//! layer whose shape follows [`LogFormat`].

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::{LogFormat, LoggingSettings};
use crate::error::RegformError;

/// Initialize logging
///
/// `RUST_LOG` wins over the configured filter when set.
///
/// # Errors
///
/// Returns [`RegformError::Observability`] if the filter cannot be parsed or a
/// global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use regform::config::LoggingSettings;
/// use regform::observability;
///
/// # fn main() -> Result<(), regform::error::RegformError> {
/// observability::init(&LoggingSettings::default())?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
pub fn init(settings: &LoggingSettings) -> Result<(), RegformError> {
    install(settings, std::io::stderr)
}

fn install<W>(settings: &LoggingSettings, writer: W) -> Result<(), RegformError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    subscriber(settings, writer)?
        .try_init()
        .map_err(|e| RegformError::Observability(e.to_string()))
}

fn subscriber<W>(
    settings: &LoggingSettings,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static, RegformError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = build_filter(settings)?;

    Ok(tracing_subscriber::registry()
        .with(fmt_layer(settings.format, writer))
        .with(env_filter))
}

fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter, RegformError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&settings.filter)
            .map_err(|e| RegformError::Observability(format!("invalid log filter: {e}")))
    })
}

fn fmt_layer<W>(format: LogFormat, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer().with_writer(writer);
    match format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}
