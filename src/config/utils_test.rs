use super::*;
use crate::config::constants::{DEFAULT_MODEL, MAX_COMPLETION_TOKENS};

#[test]
fn test_parse_configuration_defaults() {
    let config: Configuration = toml::from_str("").expect("empty config must parse");
    assert_eq!(config.backend.model, DEFAULT_MODEL);
    assert_eq!(config.backend.max_tokens, MAX_COMPLETION_TOKENS);
    assert_eq!(config.backend.temperature, 0.5);
    assert!(config.backend.api_key.is_none());
    assert!(config.backend.tag_code_blocks);
    assert_eq!(config.log.level.as_deref(), Some("info"));
}

#[test]
fn test_parse_configuration_overrides() {
    let raw = r#"
[backend]
endpoint = "http://localhost:8080"
api_key = "secret"
model = "mixtral-8x7b-32768"
max_tokens = 512
temperature = 0.9
tag_code_blocks = false

[log]
level = "debug"

[theme]
name = "InspiredGitHub"
"#;
    let config: Configuration = toml::from_str(raw).expect("config must parse");
    assert_eq!(config.backend.endpoint, "http://localhost:8080");
    assert_eq!(config.backend.api_key.as_deref(), Some("secret"));
    assert_eq!(config.backend.model, "mixtral-8x7b-32768");
    assert_eq!(config.backend.max_tokens, 512);
    assert_eq!(config.backend.temperature, 0.9);
    assert!(!config.backend.tag_code_blocks);
    assert_eq!(config.log.level.as_deref(), Some("debug"));
    assert_eq!(config.theme.name.as_deref(), Some("InspiredGitHub"));
}

#[test]
fn test_resolve_path() {
    unsafe { std::env::set_var("PARLEY_TEST_DIR", "/tmp/parley-test") };
    let resolved = resolve_path("$PARLEY_TEST_DIR/parley.log").expect("resolving path");
    assert_eq!(resolved, "/tmp/parley-test/parley.log");

    let resolved = resolve_path("${PARLEY_TEST_DIR}/parley.log").expect("resolving path");
    assert_eq!(resolved, "/tmp/parley-test/parley.log");
}

#[test]
fn test_basename() {
    assert_eq!(basename("/var/log/parley.log"), "parley.log");
    assert_eq!(basename("parley.log"), "parley.log");
}

#[test]
fn test_init_theme_unknown_name() {
    let config = ThemeConfig {
        name: Some("no-such-theme".to_string()),
        folder_path: None,
    };
    assert!(init_theme(&config).is_err());
}
