//! Conversation session management.
//!
//! A `ChatSession` owns one conversation log, renders the context window
//! into each prompt, and records token usage. A `SessionStore` keeps
//! independent sessions keyed by `SessionId`.

mod chat;
mod manager;
mod store;
mod types;


pub use manager::ChatSession;
pub use store::SessionStore;
pub use types::ChatError;
