//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file
//! settings. Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file values

#![allow(clippy::unwrap_used)]

use lingo_cli::config::{ConfigFile, EngineSection, ResolveOptions, resolve_config};
use serial_test::serial;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        engine: EngineSection {
            endpoint: Some("http://config.local:11434".to_string()),
            model: Some("config_model".to_string()),
            to: Some("ja".to_string()),
            api_key: None,
            api_key_env: None,
        },
    }
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        to: None,
        endpoint: Some("http://cli.local:8080".to_string()),
        model: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.endpoint, "http://cli.local:8080");
    assert_eq!(resolved.model, "config_model");
}

#[test]
fn test_cli_target_overrides_config_target() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        to: Some("es".to_string()),
        endpoint: None,
        model: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.target_language, Some("es".to_string()));
}

#[test]
fn test_config_values_used_without_cli_overrides() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.endpoint, "http://config.local:11434");
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.target_language, Some("ja".to_string()));
}

#[test]
#[serial]
fn test_api_key_env_preferred_over_config_key() {
    let mut config = make_config_with_defaults();
    config.engine.api_key = Some("from_file".to_string());
    config.engine.api_key_env = Some("LINGO_TEST_API_KEY".to_string());

    unsafe { std::env::set_var("LINGO_TEST_API_KEY", "from_env") };

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();
    assert_eq!(resolved.api_key, Some("from_env".to_string()));

    unsafe { std::env::remove_var("LINGO_TEST_API_KEY") };
}

#[test]
#[serial]
fn test_unset_api_key_env_is_an_error() {
    let mut config = make_config_with_defaults();
    config.engine.api_key_env = Some("LINGO_TEST_MISSING_KEY".to_string());

    unsafe { std::env::remove_var("LINGO_TEST_MISSING_KEY") };

    let result = resolve_config(&ResolveOptions::default(), &config);
    assert!(result.is_err());
}
