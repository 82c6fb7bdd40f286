//! Google Gemini API client.
//!
//! Implements `TextGenerator` and `ModelCatalog` for Gemini models via the
//! Generative Language REST API.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;
