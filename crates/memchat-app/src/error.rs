//! Errors that end a `memchat` run.

use memchat_ai::AiError;
use memchat_common::{ConfigError, MemchatError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Startup, config, or terminal I/O failure.
    #[error(transparent)]
    Startup(#[from] MemchatError),

    /// The HTTP client could not be built.
    #[error("could not create Gemini client: {0}")]
    Client(#[from] AiError),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Startup(err.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Startup(err.into())
    }
}

impl AppError {
    /// The underlying client error, if this failure came from the client.
    pub fn ai_error(&self) -> Option<&AiError> {
        match self {
            Self::Client(err) => Some(err),
            Self::Startup(_) => None,
        }
    }
}
