use std::env;
use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::types::ManagerError;

use super::{paths, Config};

pub const API_URL_ENV: &str = "CONNECTORS_API_URL";

impl Config {
    /// Load configuration from config.json in the app directory
    /// Falls back to defaults if the file doesn't exist or can't be parsed
    pub async fn load() -> Self {
        let mut config = match paths::get_config_path() {
            Ok(path) => match Self::load_from(&path).await {
                Ok(config) => config,
                Err(err) => {
                    warn!(error = ?err, "Failed to load config.json, using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                warn!(error = ?err, "Failed to locate config.json, using defaults");
                Self::default()
            }
        };

        config.apply_env_override(env::var(API_URL_ENV).ok().as_deref());
        info!(
            api = %config.api_base_url,
            poll_secs = config.poll_interval_secs,
            "Loaded configuration"
        );
        config
    }

    /// Reads the given file; a missing file yields the defaults.
    pub async fn load_from(config_path: &Path) -> Result<Self, ManagerError> {
        if !config_path.exists() {
            warn!(path = %config_path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)
            .await
            .map_err(|err| ManagerError::Config(format!("Failed to read config file: {err}")))?;

        serde_json::from_str(&contents)
            .map_err(|err| ManagerError::Config(format!("Failed to parse config.json: {err}")))
    }

    fn apply_env_override(&mut self, custom_url: Option<&str>) {
        if let Some(custom) = custom_url {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                self.api_base_url = trimmed.to_string();
            }
        }
    }
}
