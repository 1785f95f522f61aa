use crate::{Error, Result, config::LogsConfig};
use std::{
    fs::{File, OpenOptions},
    sync::Arc,
};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

/// Keeps the log file sink alive. Drop it (or call [`LogGuard::shutdown`])
/// once the server has stopped so buffered records reach disk.
#[must_use = "dropping the guard closes the log file"]
pub struct LogGuard {
    file: Option<Arc<File>>,
}

impl LogGuard {
    pub fn shutdown(self) {}

    fn sync(&self) {
        if let Some(file) = &self.file
            && let Err(e) = file.sync_all()
        {
            eprintln!("Failed to sync log file: {}", e);
        }
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        self.sync();
    }
}

/// Checks that `level` names a tracing level.
pub fn validate_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        Error::logging(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })?;
    Ok(())
}

/// Level to run with: `RUST_LOG` wins over the configured one.
pub fn resolve_level(config: &LogsConfig) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone())
}

/// Installs the global subscriber: JSON to stdout, plus JSON appended to
/// `config.file` when set.
pub fn init(config: &LogsConfig) -> Result<LogGuard> {
    let level = resolve_level(config);

    // RUST_LOG may hold full directives, so only plain levels are validated.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            validate_level(&level)?;
            EnvFilter::new(&level)
        }
    };

    let file = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::logging(format!("Cannot open log file {}: {}", path, e)))?;
            Some(Arc::new(file))
        }
        None => None,
    };

    let file_layer = file.clone().map(|file| {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(file)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::logging(format!("Failed to install subscriber: {}", e)))?;

    Ok(LogGuard { file })
}
