//! Configuration management for the user browser CLI.
//!
//! The configuration is stored in TOML format. It names the API to talk to and
//! where the access token comes from; the token itself is never written to the
//! file.
//!
//! ```toml
//! [api]
//! base_url = "https://api.github.com"
//! token_env = "GITHUB_TOKEN"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use github_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "user-browser.toml";

/// Environment variable that overrides `api.base_url`
pub const BASE_URL_OVERRIDE_ENV_VAR: &str = "USER_BROWSER_BASE_URL";

/// Default name of the environment variable holding the token
pub const DEFAULT_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Token baked in at build time, used when the runtime variable is not set.
const BUILD_TIME_TOKEN: Option<&str> = option_env!("USER_BROWSER_GITHUB_TOKEN");

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the user browser CLI.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read, or
    /// does not contain a valid configuration.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration at `path`, or the defaults when there is no file.
    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the specified path.
    ///
    /// Parent directories are created when missing and an existing file is
    /// overwritten.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Builds the GitHub client configuration, applying environment overrides.
    pub fn client_config(&self) -> Result<ClientConfig, Error> {
        let base_url = self.api.resolve_base_url();
        let token = self.api.resolve_token();

        debug!(
            base_url = base_url,
            has_token = token.is_some(),
            "Resolved client configuration"
        );

        let config = ClientConfig::new(&base_url, token)?;
        Ok(match &self.api.user_agent {
            Some(user_agent) => config.with_user_agent(user_agent.clone()),
            None => config,
        })
    }
}

/// Settings describing the GitHub API endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,

    /// Name of the environment variable that holds the access token
    #[serde(default = "ApiConfig::default_token_env")]
    pub token_env: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ApiConfig {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    fn default_token_env() -> String {
        DEFAULT_TOKEN_ENV_VAR.to_string()
    }

    /// Returns the base URL, preferring `USER_BROWSER_BASE_URL` when it is set.
    pub fn resolve_base_url(&self) -> String {
        std::env::var(BASE_URL_OVERRIDE_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }

    /// Returns the token from the configured environment variable, falling back
    /// to the token compiled into the binary.
    pub fn resolve_token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                BUILD_TIME_TOKEN
                    .filter(|t| !t.trim().is_empty())
                    .map(str::to_string)
            })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ApiConfig::default_base_url(),
            token_env: ApiConfig::default_token_env(),
            user_agent: None,
        }
    }
}

/// Resolves the path to the configuration file.
///
/// Uses `config_path` when given, otherwise `user-browser.toml` in the current
/// directory.
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
