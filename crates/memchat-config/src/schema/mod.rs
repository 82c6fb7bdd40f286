//! Configuration schema types for memchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults documented on each field.

mod api;
mod chat;
mod model;
mod system;

pub use api::*;
pub use chat::*;
pub use model::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Top-level memchat configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemchatConfig {
    pub model: ModelConfig,
    pub chat: ChatConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}
