//! Independent sessions keyed by id.

use std::collections::HashMap;

use memchat_common::SessionId;
use tracing::debug;

use crate::conversation::DEFAULT_CONTEXT_TURNS;

use super::manager::ChatSession;

/// Holds one `ChatSession` per `SessionId`. Sessions share nothing.
pub struct SessionStore {
    sessions: HashMap<SessionId, ChatSession>,
    context_turns: usize,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            context_turns: DEFAULT_CONTEXT_TURNS,
        }
    }

    /// Window size given to sessions created from now on.
    pub fn with_context_turns(mut self, turns: usize) -> Self {
        self.context_turns = turns;
        self
    }

    /// Fetch the session for `id`, creating an empty one on first use.
    pub fn get_or_create(&mut self, id: &SessionId) -> &mut ChatSession {
        let context_turns = self.context_turns;
        self.sessions.entry(id.clone()).or_insert_with(|| {
            debug!(session = %id.short(), "creating session");
            ChatSession::new(id.clone()).with_context_turns(context_turns)
        })
    }

    pub fn get(&self, id: &SessionId) -> Option<&ChatSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut ChatSession> {
        self.sessions.get_mut(id)
    }

    /// Drop a session and its memory entirely.
    pub fn remove(&mut self, id: &SessionId) -> Option<ChatSession> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SessionId> {
        self.sessions.keys()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
