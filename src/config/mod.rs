mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `$CONFIG_PATH`, or `config.yaml` in the working
/// directory. A missing default file yields built-in defaults; a missing file
/// named explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from(DEFAULT_CONFIG_PATH).await,
        Err(_) => {
            debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            let config = Config::default();
            validate(&config)?;
            Ok(config)
        }
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Cannot read {}: {}", config_path, e)))?;

    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = if config_str.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(config_str)?
    };

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    let llm = &config.llm;

    if llm.model.trim().is_empty() {
        return Err(Error::config("llm.model must not be empty"));
    }

    if llm.timeout_secs == 0 {
        return Err(Error::config("llm.timeout_secs must be greater than zero"));
    }

    reqwest::Url::parse(&llm.base_url)
        .map_err(|e| Error::config(format!("llm.base_url '{}' is invalid: {}", llm.base_url, e)))?;

    if config.server.host.trim().is_empty() {
        return Err(Error::config("server.host must not be empty"));
    }

    Ok(())
}
