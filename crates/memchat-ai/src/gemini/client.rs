//! Gemini API client struct, request building, and response parsing.

use crate::models::ModelPage;
use crate::{AiError, Generation, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    pub(crate) fn list_url(&self) -> String {
        format!("{}/models", self.config.base_url)
    }

    /// Build the JSON request body for a single-turn prompt.
    pub(crate) fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        })
    }
}

/// Parse a `generateContent` response.
///
/// Text from every part of the first candidate is concatenated. A response
/// that carries no text at all is an error, never an empty generation.
pub(crate) fn parse_generate_response(json: &serde_json::Value) -> Result<Generation, AiError> {
    let candidates = json["candidates"].as_array();

    let Some(first) = candidates.and_then(|c| c.first()) else {
        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return Err(AiError::EmptyResponse(format!("prompt blocked: {reason}")));
        }
        return Err(AiError::ParseError("no candidates in response".to_string()));
    };

    let mut text = String::new();
    if let Some(parts) = first["content"]["parts"].as_array() {
        for part in parts {
            if let Some(t) = part["text"].as_str() {
                text.push_str(t);
            }
        }
    }

    if text.is_empty() {
        let reason = first["finishReason"].as_str().unwrap_or("UNKNOWN");
        return Err(AiError::EmptyResponse(format!(
            "no text in candidate (finish reason: {reason})"
        )));
    }

    let usage = TokenUsage {
        input_tokens: json["usageMetadata"]["promptTokenCount"]
            .as_u64()
            .unwrap_or(0),
        output_tokens: json["usageMetadata"]["candidatesTokenCount"]
            .as_u64()
            .unwrap_or(0),
    };

    Ok(Generation {
        text,
        model_version: json["modelVersion"].as_str().map(str::to_string),
        usage,
    })
}

/// Parse one page of a `models` listing.
pub(crate) fn parse_models_page(json: serde_json::Value) -> Result<ModelPage, AiError> {
    serde_json::from_value(json).map_err(|e| AiError::ParseError(e.to_string()))
}

/// Turn a non-success HTTP status into an error, preferring the server's
/// own message from `{"error": {"message": ...}}` bodies.
pub(crate) fn status_error(status: reqwest::StatusCode, body: &str) -> AiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        reqwest::StatusCode::TOO_MANY_REQUESTS => AiError::RateLimited,
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            AiError::Unauthorized(message)
        }
        _ => AiError::ApiError(format!("HTTP {status}: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> GeminiClient {
        GeminiClient::new(
            GeminiConfig::new("test-key")
                .with_model("gemini-1.5-pro")
                .with_max_tokens(256)
                .with_temperature(0.2),
        )
        .unwrap()
    }

    #[test]
    fn urls_use_model_and_base() {
        let client = client();
        assert_eq!(
            client.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro:generateContent"
        );
        assert_eq!(
            client.list_url(),
            "https://generativelanguage.googleapis.com/v1beta/models"
        );
        assert!(!client.generate_url().contains("test-key"));
    }

    #[test]
    fn request_body_is_single_user_turn() {
        let body = client().build_request_body("User: hi");
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "User: hi");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
        assert_eq!(body["generationConfig"]["temperature"], 0.2);
    }

    #[test]
    fn parses_text_and_usage() {
        let json = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hello" }, { "text": ", world" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 3 },
            "modelVersion": "gemini-2.0-flash-001"
        });
        let generation = parse_generate_response(&json).unwrap();
        assert_eq!(generation.text, "Hello, world");
        assert_eq!(generation.usage.input_tokens, 12);
        assert_eq!(generation.usage.output_tokens, 3);
        assert_eq!(
            generation.model_version.as_deref(),
            Some("gemini-2.0-flash-001")
        );
    }

    #[test]
    fn missing_usage_defaults_to_zero() {
        let json = json!({ "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }] });
        let generation = parse_generate_response(&json).unwrap();
        assert_eq!(generation.usage, TokenUsage::default());
        assert!(generation.model_version.is_none());
    }

    #[test]
    fn blocked_prompt_is_empty_response() {
        let json = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = parse_generate_response(&json).unwrap_err();
        assert!(matches!(err, AiError::EmptyResponse(ref m) if m.contains("SAFETY")));
    }

    #[test]
    fn candidate_without_text_is_empty_response() {
        let json = json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] });
        let err = parse_generate_response(&json).unwrap_err();
        assert!(matches!(err, AiError::EmptyResponse(ref m) if m.contains("MAX_TOKENS")));
    }

    #[test]
    fn no_candidates_is_parse_error() {
        let err = parse_generate_response(&json!({})).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn models_page_parses() {
        let page = parse_models_page(json!({
            "models": [
                { "name": "models/gemini-2.0-flash", "inputTokenLimit": 1048576 },
                { "name": "models/aqa" }
            ],
            "nextPageToken": "abc"
        }))
        .unwrap();
        assert_eq!(page.models.len(), 2);
        assert_eq!(page.models[1].output_token_limit, None);
        assert_eq!(page.next_token(), Some("abc"));
    }

    #[test]
    fn models_page_with_wrong_shape_is_parse_error() {
        let err = parse_models_page(json!({ "models": "nope" })).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn status_errors_are_classified() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        let err = status_error(reqwest::StatusCode::BAD_REQUEST, body);
        assert_eq!(err.to_string(), "API error: HTTP 400 Bad Request: API key not valid.");

        let err = status_error(reqwest::StatusCode::FORBIDDEN, body);
        assert!(matches!(err, AiError::Unauthorized(ref m) if m == "API key not valid."));

        let err = status_error(reqwest::StatusCode::TOO_MANY_REQUESTS, "");
        assert!(matches!(err, AiError::RateLimited));

        let err = status_error(reqwest::StatusCode::BAD_GATEWAY, "  upstream down \n");
        assert_eq!(err.to_string(), "API error: HTTP 502 Bad Gateway: upstream down");
    }
}
