//! Tracing subscriber setup.
//!
//! Logs go to the console and, when `LOG_FILE` is set, are also appended to that file.
//! `RUST_LOG` controls the filter, defaulting to `info,sqlx=warn`.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::error::config::ConfigError;

const DEFAULT_FILTER: &str = "info,sqlx=warn";

pub fn init_logging(log_file: Option<&Path>) -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::LogFile {
                    path: path.display().to_string(),
                    source,
                })?;

            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    if let Some(path) = log_file {
        tracing::info!("Writing logs to {}", path.display());
    }

    Ok(())
}
