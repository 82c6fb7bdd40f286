//! memchat configuration system.
//!
//! Provides TOML-based configuration with validation, plus credential
//! resolution from the environment. All config sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use memchat_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("model: {}", config.model.name);
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{api_key_from_env, load_dotenv, mask_key, API_KEY_VAR};
pub use schema::{MemchatConfig, CONFIG_SCHEMA_VERSION};

use memchat_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// An explicit path must exist; the default path is created on first use.
pub fn load_config(path: Option<&Path>) -> Result<MemchatConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
