//! Tests for configuration loading

use std::fs;

use armcheck::config::{CONFIG_ENV, Config, ParsePolicy};
use armcheck::error::ConfigError;
use armcheck::output::OutputMode;
use serial_test::serial;
use tempfile::TempDir;

// =============================================================================
// FILE LOADING TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.input.on_parse_error, ParsePolicy::Error);
    assert_eq!(config.output.format, OutputMode::Human);
}

#[test]
fn test_from_file_partial_sections() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.output.format, OutputMode::Json);
    assert_eq!(config.input.on_parse_error, ParsePolicy::Error);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_invalid_toml_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[input]\non_parse_error = 3\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

// =============================================================================
// ENVIRONMENT TESTS
// =============================================================================

#[test]
#[serial]
fn test_env_path_is_used() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("env.toml");
    fs::write(&path, "[input]\non_parse_error = \"zero\"\n").unwrap();

    // SAFETY: serialised with other environment tests
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let config = Config::load(None);
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(config.unwrap().input.on_parse_error, ParsePolicy::Zero);
}

#[test]
#[serial]
fn test_env_path_missing_falls_back_to_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    // SAFETY: serialised with other environment tests
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let config = Config::load(None);
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(config.unwrap(), Config::default());
}

#[test]
#[serial]
fn test_explicit_path_beats_env() {
    let temp = TempDir::new().unwrap();
    let explicit = temp.path().join("explicit.toml");
    fs::write(&explicit, "[output]\nformat = \"json\"\n").unwrap();

    // SAFETY: serialised with other environment tests
    unsafe { std::env::set_var(CONFIG_ENV, temp.path().join("env.toml")) };
    let resolved = Config::resolve_path(Some(&explicit));
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(resolved, Some(explicit));
}
