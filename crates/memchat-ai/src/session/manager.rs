//! ChatSession struct and conversation management.

use memchat_common::SessionId;
use tracing::info;

use crate::conversation::{ContextWindow, Conversation, Turn, DEFAULT_CONTEXT_TURNS};
use crate::token_tracker::TokenTracker;

/// A conversation session with a bounded memory of prior turns.
pub struct ChatSession {
    pub(super) id: SessionId,
    /// Conversation log, append-only until reset.
    pub(super) log: Conversation,
    /// Prior turns rendered into each prompt.
    pub(super) context_turns: usize,
    /// Token usage tracker.
    pub(super) tracker: TokenTracker,
}

impl ChatSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            log: Conversation::new(),
            context_turns: DEFAULT_CONTEXT_TURNS,
            tracker: TokenTracker::new(),
        }
    }

    pub fn with_context_turns(mut self, turns: usize) -> Self {
        self.context_turns = turns;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn context_turns(&self) -> usize {
        self.context_turns
    }

    /// The window the next `submit` will render, computed fresh each call.
    pub fn context_window(&self) -> ContextWindow<'_> {
        self.log.window(self.context_turns)
    }

    /// Full conversation log, oldest first.
    pub fn turns(&self) -> &[Turn] {
        self.log.turns()
    }

    /// The last `n` turns, oldest first.
    pub fn recent(&self, n: usize) -> &[Turn] {
        self.log.recent(n)
    }

    /// Number of turns in memory.
    pub fn memory_count(&self) -> usize {
        self.log.len()
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Forget the conversation and its token counts.
    pub fn reset(&mut self) {
        let dropped = self.log.len();
        self.log.clear();
        self.tracker.reset();
        info!(session = %self.id.short(), dropped, "conversation memory cleared");
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(SessionId::new())
    }
}
