//! Full configuration validation.
//!
//! Validates all numeric ranges and the shape of string fields. Each section
//! has its own check; errors are collected into a single `ConfigError`.

mod helpers;


use crate::schema::MemchatConfig;
use memchat_common::ConfigError;

use helpers::{validate_non_empty, validate_range, validate_range_f64, validate_range_u64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MemchatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_model(&mut errors, config);
    validate_chat(&mut errors, config);
    validate_api(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_model(errors: &mut Vec<String>, config: &MemchatConfig) {
    validate_non_empty(errors, "model.name", &config.model.name);
    if config.model.name.contains('/') {
        errors.push(format!(
            "model.name = {:?} must be a bare model id (no '/')",
            config.model.name
        ));
    }
    validate_range_f64(errors, "model.temperature", config.model.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "model.max_output_tokens",
        config.model.max_output_tokens,
        1,
        65536,
    );
}

fn validate_chat(errors: &mut Vec<String>, config: &MemchatConfig) {
    validate_range_u64(
        errors,
        "chat.context_turns",
        config.chat.context_turns as u64,
        0,
        100,
    );
    validate_range_u64(
        errors,
        "chat.history_preview",
        config.chat.history_preview as u64,
        1,
        50,
    );
    validate_range_u64(
        errors,
        "chat.preview_chars",
        config.chat.preview_chars as u64,
        10,
        500,
    );
}

fn validate_api(errors: &mut Vec<String>, config: &MemchatConfig) {
    let base = &config.api.base_url;
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        errors.push(format!("api.base_url = {base:?} must be an http(s) URL"));
    }
    validate_range_u64(
        errors,
        "api.connect_timeout_secs",
        config.api.connect_timeout_secs,
        1,
        120,
    );
    validate_range_u64(
        errors,
        "api.request_timeout_secs",
        config.api.request_timeout_secs,
        1,
        600,
    );
    validate_range(errors, "api.page_size", config.api.page_size, 1, 1000);
}
