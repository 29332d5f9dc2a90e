mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
pub const BASE_URL_VAR: &str = "DOCQA_BASE_URL";

pub async fn load() -> Result<Config> {
    let config_path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "docqa.yaml".to_string());
    let mut config = load_from(&config_path).await?;

    if let Ok(base_url) = env::var(BASE_URL_VAR) {
        debug!("Overriding base URL from {}: {}", BASE_URL_VAR, base_url);
        config.server.base_url = base_url;
    }

    validate(&config)?;
    Ok(config)
}

/// Reads a YAML config file, falling back to defaults when it does not exist.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    reqwest::Url::parse(&config.server.base_url).map_err(|e| {
        Error::config(format!(
            "Invalid base_url '{}': {}",
            config.server.base_url, e
        ))
    })?;

    for (name, path) in [
        ("upload_path", &config.server.upload_path),
        ("ask_path", &config.server.ask_path),
    ] {
        if !path.starts_with('/') {
            return Err(Error::config(format!("{} must start with '/': {}", name, path)));
        }
    }

    Ok(())
}
