//! Conversation memory settings.

use serde::{Deserialize, Serialize};

/// How much of the conversation is replayed into each prompt, and how much
/// of it is previewed by `/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Prior turns rendered into every prompt (valid range: 0-100).
    pub context_turns: usize,
    /// Turns shown by the recent-conversation preview (valid range: 1-50).
    pub history_preview: usize,
    /// Characters kept per previewed turn (valid range: 10-500).
    pub preview_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            context_turns: 6,
            history_preview: 3,
            preview_chars: 50,
        }
    }
}
