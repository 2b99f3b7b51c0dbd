use serde::{Deserialize, Serialize};
use std::path::Path;

use super::blocking::BlockingConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::store::StoreConfig;

const LOCAL_CONFIG_PATH: &str = "focus-guard.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/focus-guard/config.toml";

/// Main configuration structure for Focus Guard
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Blocking page and protected host
    #[serde(default)]
    pub blocking: BlockingConfig,

    /// Blocklist and settings store
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. focus-guard.toml in current directory
    /// 3. /etc/focus-guard/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(store_path) = overrides.store_path {
            self.store.path = store_path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(redirect_url) = overrides.redirect_url {
            self.blocking.redirect_url = redirect_url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let redirect = &self.blocking.redirect_url;
        if !redirect.starts_with("https://") && !redirect.starts_with("http://") {
            return Err(ConfigError::Validation(format!(
                "Redirect URL must be http(s): '{}'",
                redirect
            )));
        }

        if self.store.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Store path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, toml_string).map_err(|e| ConfigError::FileWrite {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Path of the first config file found in the default locations
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub store_path: Option<String>,
    pub log_level: Option<String>,
    pub redirect_url: Option<String>,
}
