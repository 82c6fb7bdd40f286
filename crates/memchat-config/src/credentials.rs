//! API credential resolution.
//!
//! The credential never lives in `config.toml`. It comes from the process
//! environment, optionally seeded from a `.env` file (`KEY=VALUE` lines).

use std::path::{Path, PathBuf};

use memchat_common::ConfigError;
use tracing::debug;

/// Environment variable holding the Generative Language API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Parse `.env` contents into key/value pairs.
///
/// Blank lines and `#` comments are skipped; surrounding quotes on values
/// are stripped. Lines without `=` are ignored.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Load the first `.env` found among `candidates` into the process
/// environment. Variables already set are left untouched.
///
/// Returns the path that was loaded, if any.
pub fn load_dotenv_from(candidates: &[PathBuf]) -> Option<PathBuf> {
    for path in candidates {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        for (key, value) in parse_dotenv(&contents) {
            if std::env::var_os(&key).is_none() {
                std::env::set_var(&key, value);
            }
        }
        debug!("loaded environment from {}", path.display());
        return Some(path.clone());
    }
    None
}

/// Load `.env` from the current directory, falling back to `workspace_root`.
pub fn load_dotenv(workspace_root: Option<&Path>) -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(root) = workspace_root {
        candidates.push(root.join(".env"));
    }
    load_dotenv_from(&candidates)
}

/// Resolve the API key through `lookup` (normally `std::env::var`).
///
/// A missing or blank value is a fatal configuration error.
pub fn api_key_with(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    match lookup(API_KEY_VAR) {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingCredential(API_KEY_VAR.into())),
    }
}

/// Resolve the API key from the process environment.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    api_key_with(|name| std::env::var(name).ok())
}

/// Mask a key for display: first 10 and last 4 characters.
///
/// Keys too short to mask meaningfully are fully hidden.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 14 {
        return "*".repeat(chars.len().max(4));
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
