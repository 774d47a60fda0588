use super::*;
use crate::config::{ApiConfig, BASE_URL_OVERRIDE_ENV_VAR};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn run(cmd: ConfigCommands, path: &Path) -> (Result<(), Error>, String) {
    let mut out = Vec::new();
    let result = execute(&cmd, path, &mut out);
    (result, String::from_utf8(out).expect("Output should be UTF-8"))
}

#[test]
fn test_init_writes_default_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");

    let (result, output) = run(ConfigCommands::Init, &config_path);

    assert!(result.is_ok());
    assert!(output.starts_with("Configuration initialized at"));
    let loaded = AppConfig::load(&config_path).expect("Failed to load config");
    assert_eq!(loaded, AppConfig::default());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    fs::write(&config_path, "[api]\ntoken_env = \"KEEP_ME\"\n").expect("Failed to write config");

    let (result, _) = run(ConfigCommands::Init, &config_path);

    assert!(matches!(result, Err(Error::Config(ref msg)) if msg.contains("already exists")));
    let content = fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(content.contains("KEEP_ME"));
}

#[test]
#[serial]
fn test_validate_accepts_valid_file() {
    std::env::remove_var(BASE_URL_OVERRIDE_ENV_VAR);
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    AppConfig::default()
        .save(&config_path)
        .expect("Failed to save config");

    let (result, output) = run(ConfigCommands::Validate, &config_path);

    assert!(result.is_ok());
    assert_eq!(output, "Configuration is valid\n");
}

#[test]
#[serial]
fn test_validate_rejects_bad_base_url() {
    std::env::remove_var(BASE_URL_OVERRIDE_ENV_VAR);
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    fs::write(&config_path, "[api]\nbase_url = \"ftp://example.com\"\n")
        .expect("Failed to write config");

    let (result, output) = run(ConfigCommands::Validate, &config_path);

    assert!(matches!(result, Err(Error::Config(ref msg)) if msg.contains("invalid")));
    assert!(output.is_empty());
}

#[test]
#[serial]
fn test_validate_checks_file_even_when_override_is_set() {
    std::env::set_var(BASE_URL_OVERRIDE_ENV_VAR, "https://api.github.com");
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    fs::write(&config_path, "[api]\nbase_url = \"ftp://example.com\"\n")
        .expect("Failed to write config");

    let (result, output) = run(ConfigCommands::Validate, &config_path);

    std::env::remove_var(BASE_URL_OVERRIDE_ENV_VAR);
    assert!(matches!(result, Err(Error::Config(ref msg)) if msg.contains("invalid")));
    assert!(output.is_empty());
}

#[test]
#[serial]
fn test_validate_ignores_broken_override() {
    std::env::set_var(BASE_URL_OVERRIDE_ENV_VAR, "not a url");
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    AppConfig::default()
        .save(&config_path)
        .expect("Failed to save config");

    let (result, output) = run(ConfigCommands::Validate, &config_path);

    std::env::remove_var(BASE_URL_OVERRIDE_ENV_VAR);
    assert!(result.is_ok());
    assert_eq!(output, "Configuration is valid\n");
}

#[test]
fn test_validate_rejects_empty_token_env() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    fs::write(&config_path, "[api]\ntoken_env = \"  \"\n").expect("Failed to write config");

    let (result, _) = run(ConfigCommands::Validate, &config_path);

    assert!(matches!(result, Err(Error::Config(ref msg)) if msg.contains("token_env")));
}

#[test]
fn test_validate_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("missing.toml");

    let (result, _) = run(ConfigCommands::Validate, &config_path);

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_get_requires_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("missing.toml");

    let (result, output) = run(ConfigCommands::Get { key: None }, &config_path);

    assert!(matches!(result, Err(Error::Config(ref msg)) if msg.contains("not found")));
    assert!(output.is_empty());
}

#[test]
fn test_get_single_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    AppConfig::default()
        .save(&config_path)
        .expect("Failed to save config");

    let (result, output) = run(
        ConfigCommands::Get {
            key: Some("api.base_url".to_string()),
        },
        &config_path,
    );

    assert!(result.is_ok());
    assert_eq!(output, "api.base_url: https://api.github.com\n");
}

#[test]
fn test_get_whole_config_prints_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    AppConfig::default()
        .save(&config_path)
        .expect("Failed to save config");

    let (result, output) = run(ConfigCommands::Get { key: None }, &config_path);

    assert!(result.is_ok());
    let parsed: AppConfig = toml::from_str(&output).expect("Output should be valid TOML");
    assert_eq!(parsed, AppConfig::default());
}

#[test]
fn test_get_unknown_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    AppConfig::default()
        .save(&config_path)
        .expect("Failed to save config");

    let (result, _) = run(
        ConfigCommands::Get {
            key: Some("api.password".to_string()),
        },
        &config_path,
    );

    assert!(matches!(result, Err(Error::InvalidArguments(_))));
}

#[test]
fn test_set_then_get() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");

    let (result, output) = run(
        ConfigCommands::Set {
            key: "api.token_env".to_string(),
            value: "MY_GITHUB_TOKEN".to_string(),
        },
        &config_path,
    );
    assert!(result.is_ok());
    assert_eq!(output, "Configuration updated: api.token_env = MY_GITHUB_TOKEN\n");

    let (result, output) = run(
        ConfigCommands::Get {
            key: Some("api.token_env".to_string()),
        },
        &config_path,
    );
    assert!(result.is_ok());
    assert_eq!(output, "api.token_env: MY_GITHUB_TOKEN\n");
}

#[test]
fn test_set_empty_user_agent_clears_it() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");
    AppConfig {
        api: ApiConfig {
            user_agent: Some("tester/1.0".to_string()),
            ..Default::default()
        },
    }
    .save(&config_path)
    .expect("Failed to save config");

    let (result, _) = run(
        ConfigCommands::Set {
            key: "api.user_agent".to_string(),
            value: String::new(),
        },
        &config_path,
    );

    assert!(result.is_ok());
    let loaded = AppConfig::load(&config_path).expect("Failed to load config");
    assert!(loaded.api.user_agent.is_none());
}

#[test]
fn test_set_rejects_empty_base_url() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("user-browser.toml");

    let (result, _) = run(
        ConfigCommands::Set {
            key: "api.base_url".to_string(),
            value: " ".to_string(),
        },
        &config_path,
    );

    assert!(matches!(result, Err(Error::InvalidArguments(_))));
    assert!(!config_path.exists());
}
