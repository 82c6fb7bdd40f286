//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::LogLevel;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_memchat_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, memchat_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
name = "gemini-1.5-pro"

[chat]
context_turns = 10
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gemini-1.5-pro");
    assert_eq!(config.chat.context_turns, 10);
    // Defaults preserved
    assert_eq!(config.model.max_output_tokens, 4096);
    assert_eq!(config.chat.history_preview, 3);
    assert_eq!(config.api.page_size, 50);
    assert_eq!(config.logging.level, LogLevel::Warning);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, memchat_common::ConfigError::ParseError(_)));
}

#[test]
fn load_out_of_range_values_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[chat]
context_turns = 1000
"#,
    )
    .unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(
        err,
        memchat_common::ConfigError::ValidationError(_)
    ));
    assert!(err.to_string().contains("chat.context_turns"));
}

#[test]
fn load_log_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"DEBUG\"\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, LogLevel::Debug);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memchat").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.name, "gemini-2.0-flash");
    assert_eq!(config.chat.context_turns, 6);
}

#[test]
fn default_template_mentions_every_section() {
    let toml = template::default_config_toml();
    for section in ["[model]", "[chat]", "[api]", "[logging]"] {
        assert!(toml.contains(section), "template missing {section}");
    }
}

#[test]
fn default_config_path_ends_with_memchat() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("memchat/config.toml"));
    }
}
