//! Session error type.

use crate::{AiError, AiErrorKind};

/// A failed `submit`. Carries the underlying remote error so callers can
/// branch on its kind instead of parsing the message.
#[derive(Debug, thiserror::Error)]
#[error("Error getting response: {source}")]
pub struct ChatError {
    #[source]
    source: AiError,
}

impl ChatError {
    pub fn kind(&self) -> AiErrorKind {
        self.source.kind()
    }

    pub fn cause(&self) -> &AiError {
        &self.source
    }

    pub fn into_cause(self) -> AiError {
        self.source
    }
}

impl From<AiError> for ChatError {
    fn from(source: AiError) -> Self {
        Self { source }
    }
}
