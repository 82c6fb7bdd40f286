//! Generation model selection and sampling parameters.

use serde::{Deserialize, Serialize};

/// Model used for `generateContent` calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model id without the `models/` prefix.
    pub name: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Upper bound on generated tokens (valid range: 1-65536).
    pub max_output_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.0-flash".into(),
            temperature: 0.7,
            max_output_tokens: 4096,
        }
    }
}
