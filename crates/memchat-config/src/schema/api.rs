//! Remote endpoint settings.

use serde::{Deserialize, Serialize};

/// Generative Language API endpoint and HTTP limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u64,
    /// Models requested per list page (valid range: 1-1000).
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            page_size: 50,
        }
    }
}
