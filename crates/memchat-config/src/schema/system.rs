//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the memchat crates at this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "memchat=debug",
            LogLevel::Info => "memchat=info",
            LogLevel::Warning => "memchat=warn",
            LogLevel::Error => "memchat=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
