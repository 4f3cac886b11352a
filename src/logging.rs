use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use crate::config::{get_config, LogFormat};
use crate::error::HappenError;

/// Initialize structured logging with tracing.
/// Call once at application startup; a second call returns an error.
pub fn init_logging() -> Result<(), HappenError> {
    let config = get_config();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Json => tracing::subscriber::set_global_default(
            registry.with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .json(),
            ),
        ),
        LogFormat::Pretty => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().with_target(true).with_thread_ids(true)),
        ),
    };
    result.map_err(|e| HappenError::Logging(format!("Failed to set global tracing subscriber: {}", e)))?;

    tracing::debug!(format = ?config.log_format, "Structured logging initialized");
    Ok(())
}
