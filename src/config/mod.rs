mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration file and applies environment overrides.
///
/// `CONFIG_PATH` names the file. When it is unset and `config.yaml` is
/// missing, built-in defaults are used instead.
pub async fn load() -> Result<Config> {
    let config = match env::var("CONFIG_PATH") {
        Ok(path) => load_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_file(DEFAULT_CONFIG_PATH).await?,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    Ok(apply_env_overrides(
        config,
        env::var("OPENAI_API_KEY").ok(),
        env::var("ALLOWED_ORIGINS").ok(),
    ))
}

pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Environment values win over the file. An empty `OPENAI_API_KEY` is
/// treated as unset; `ALLOWED_ORIGINS` is a comma-separated list.
pub fn apply_env_overrides(
    mut config: Config,
    api_key: Option<String>,
    allowed_origins: Option<String>,
) -> Config {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = Some(key);
    }

    if let Some(origins) = allowed_origins {
        config.server.allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
    }

    config
}
