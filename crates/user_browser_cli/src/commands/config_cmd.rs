use std::io::Write;
use std::path::Path;

use clap::Subcommand;
use github_client::ClientConfig;
use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Subcommands for the config command
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Create initial configuration file
    Init,

    /// Check configuration syntax
    Validate,

    /// Show current configuration
    Get {
        /// Configuration key to get (e.g., "api.base_url")
        key: Option<String>,
    },

    /// Update configuration values
    Set {
        /// Configuration key to set (e.g., "api.token_env")
        key: String,

        /// Value to set
        value: String,
    },
}

/// Execute the config command against the file at `config_path`.
#[instrument(skip(out))]
pub fn execute<W: Write>(
    cmd: &ConfigCommands,
    config_path: &Path,
    out: &mut W,
) -> Result<(), Error> {
    match cmd {
        ConfigCommands::Init => init_config(config_path, out),
        ConfigCommands::Validate => validate_config(config_path, out),
        ConfigCommands::Get { key } => get_config(config_path, key.as_deref(), out),
        ConfigCommands::Set { key, value } => set_config(config_path, key, value, out),
    }
}

fn init_config<W: Write>(config_path: &Path, out: &mut W) -> Result<(), Error> {
    debug!(message = "Initializing configuration", path = ?config_path);

    if config_path.exists() {
        let err = Error::Config(format!(
            "Configuration file already exists at {:?}",
            config_path
        ));
        error!(
            message = "Configuration file already exists",
            path = ?config_path,
            error = ?err
        );
        return Err(err);
    }

    AppConfig::default().save(config_path)?;

    info!(message = "Configuration initialized", path = ?config_path);
    writeln!(out, "Configuration initialized at {:?}", config_path)?;
    Ok(())
}

/// Loads the file and checks the values it holds. Environment overrides are
/// not applied.
fn validate_config<W: Write>(config_path: &Path, out: &mut W) -> Result<(), Error> {
    debug!(message = "Validating configuration", path = ?config_path);

    let result = AppConfig::load(config_path).and_then(|config| check_file_values(&config));
    match result {
        Ok(_) => {
            info!(message = "Configuration is valid", path = ?config_path);
            writeln!(out, "Configuration is valid")?;
            Ok(())
        }
        Err(e) => {
            error!(
                message = "Configuration is invalid",
                path = ?config_path,
                error = ?e
            );
            Err(Error::Config(format!("The configuration is invalid: {}", e)))
        }
    }
}

fn check_file_values(config: &AppConfig) -> Result<(), Error> {
    if config.api.token_env.trim().is_empty() {
        return Err(Error::Config("api.token_env cannot be empty".to_string()));
    }

    ClientConfig::new(&config.api.base_url, None)?;
    Ok(())
}

fn get_config<W: Write>(config_path: &Path, key: Option<&str>, out: &mut W) -> Result<(), Error> {
    debug!(message = "Getting configuration", path = ?config_path, key = ?key);

    let config = AppConfig::load(config_path)?;

    if let Some(key) = key {
        let value = get_config_value(&config, key)?;
        writeln!(out, "{}: {}", key, value)?;
    } else {
        let config_str = toml::to_string_pretty(&config)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;
        write!(out, "{}", config_str)?;
    }

    Ok(())
}

fn set_config<W: Write>(
    config_path: &Path,
    key: &str,
    value: &str,
    out: &mut W,
) -> Result<(), Error> {
    debug!(
        message = "Setting configuration",
        path = ?config_path,
        key = key,
        value = value
    );

    let mut config = AppConfig::load_or_default(config_path)?;

    if let Err(e) = set_config_value(&mut config, key, value) {
        error!(message = "Failed to set configuration value", key = key, value = value, error = ?e);
        return Err(e);
    }

    config.save(config_path)?;

    info!(message = "Configuration updated", key = key, value = value);
    writeln!(out, "Configuration updated: {} = {}", key, value)?;
    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> Result<String, Error> {
    match key {
        "api.base_url" => Ok(config.api.base_url.clone()),
        "api.token_env" => Ok(config.api.token_env.clone()),
        "api.user_agent" => Ok(config.api.user_agent.clone().unwrap_or_default()),
        _ => Err(Error::InvalidArguments(format!(
            "Invalid configuration key: {}",
            key
        ))),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), Error> {
    match key {
        "api.base_url" => {
            if value.trim().is_empty() {
                return Err(Error::InvalidArguments(
                    "api.base_url cannot be empty".to_string(),
                ));
            }
            config.api.base_url = value.to_string();
        }
        "api.token_env" => {
            if value.trim().is_empty() {
                return Err(Error::InvalidArguments(
                    "api.token_env cannot be empty".to_string(),
                ));
            }
            config.api.token_env = value.to_string();
        }
        "api.user_agent" => {
            config.api.user_agent = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        _ => {
            return Err(Error::InvalidArguments(format!(
                "Invalid configuration key: {}",
                key
            )))
        }
    }
    Ok(())
}
