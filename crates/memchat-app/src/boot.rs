//! Startup sequence shared by both binaries.
//!
//! Order matters: `.env` is loaded first so the credential can come from it,
//! config is read next so its log level can seed the subscriber, and the
//! credential is checked last, before any client is built.

use std::path::Path;
use std::time::Duration;

use memchat_ai::GeminiConfig;
use memchat_common::{ConfigError, MemchatError};
use memchat_config::schema::LogLevel;
use memchat_config::MemchatConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// Everything a binary needs before its first remote call.
pub struct Boot {
    pub config: MemchatConfig,
    pub api_key: String,
}

/// Turn a `--log-level` value into a filter directive.
///
/// A bare level applies to the memchat crates; anything containing `=` is
/// used as a full directive.
pub fn log_directive(override_level: Option<&str>, config_level: LogLevel) -> String {
    match override_level.map(str::trim).filter(|l| !l.is_empty()) {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("memchat={}", level.to_ascii_lowercase()),
        None => config_level.as_directive().to_string(),
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
pub fn init_logging(directive: &str) {
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| Directive::from(LevelFilter::WARN));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load `.env`, config, logging, and the API credential.
///
/// A missing credential is fatal. A broken config at the default location
/// falls back to defaults with a warning; a broken `--config` file is fatal.
pub fn boot(config_path: Option<&Path>, log_override: Option<&str>) -> Result<Boot, MemchatError> {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let dotenv = memchat_config::load_dotenv(Some(&workspace_root));

    let loaded = memchat_config::load_config(config_path);
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_logging(&log_directive(log_override, level));

    tracing::info!("memchat v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv {
        tracing::debug!("environment seeded from {}", path.display());
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) if config_path.is_some() => return Err(e.into()),
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            MemchatConfig::default()
        }
    };

    let api_key = memchat_config::api_key_from_env()?;
    Ok(Boot { config, api_key })
}

/// Apply command-line overrides and re-validate.
pub fn apply_overrides(
    config: &mut MemchatConfig,
    model: Option<&str>,
    context_turns: Option<usize>,
) -> Result<(), ConfigError> {
    if let Some(model) = model {
        config.model.name = model.to_string();
    }
    if let Some(turns) = context_turns {
        config.chat.context_turns = turns;
    }
    memchat_config::validation::validate(config)
}

/// Client settings derived from config plus the resolved key.
pub fn gemini_config(api_key: &str, config: &MemchatConfig) -> GeminiConfig {
    GeminiConfig::new(api_key)
        .with_model(config.model.name.clone())
        .with_max_tokens(config.model.max_output_tokens)
        .with_temperature(config.model.temperature)
        .with_base_url(config.api.base_url.clone())
        .with_timeouts(
            Duration::from_secs(config.api.connect_timeout_secs),
            Duration::from_secs(config.api.request_timeout_secs),
        )
        .with_page_size(config.api.page_size)
}

/// Print the fatal-startup message for `err` to stderr.
pub fn report_boot_error(err: &MemchatError) {
    eprintln!("Error: {err}");
    if let MemchatError::Config(ConfigError::MissingCredential(var)) = err {
        eprintln!(
            "Create a .env file in the working directory with:\n\n    {var}=your_api_key_here\n\n\
             Get a key from https://aistudio.google.com/app/apikey"
        );
    }
}
