//! Conversation log and the context window rendered into each prompt.

use std::fmt;

/// Prior turns replayed into a prompt unless configured otherwise.
pub const DEFAULT_CONTEXT_TURNS: usize = 6;

const START_OF_CONVERSATION: &str = "This is the start of the conversation.";
const HISTORY_HEADER: &str = "Previous conversation:\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Speaker label used in rendered prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Model => "AI",
        }
    }
}

/// One exchanged message. Fields are private so a turn cannot change after
/// it is appended.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    role: Role,
    text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text cut to `max_chars` characters, with `...` appended when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.text.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role.label(), self.text)
    }
}

/// Append-only, insertion-ordered log of turns.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// The last `n` turns, oldest first.
    pub fn recent(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// Borrow the last `size` turns as a context window.
    pub fn window(&self, size: usize) -> ContextWindow<'_> {
        ContextWindow {
            turns: self.recent(size),
        }
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

/// Suffix of a conversation, never longer than the requested size.
#[derive(Debug, Clone, Copy)]
pub struct ContextWindow<'a> {
    turns: &'a [Turn],
}

impl<'a> ContextWindow<'a> {
    pub fn turns(&self) -> &'a [Turn] {
        self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Role-labelled history text, most recent turn last.
    pub fn render(&self) -> String {
        if self.turns.is_empty() {
            return START_OF_CONVERSATION.to_string();
        }
        let mut out = String::from(HISTORY_HEADER);
        for turn in self.turns {
            out.push_str(&turn.to_string());
            out.push('\n');
        }
        out
    }

    /// Full prompt: rendered history, a blank line, then the new user text.
    pub fn render_prompt(&self, user_text: &str) -> String {
        format!("{}\n\nUser: {user_text}", self.render())
    }
}
