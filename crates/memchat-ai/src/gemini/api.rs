//! Remote calls: `TextGenerator` and `ModelCatalog` for `GeminiClient`.

use async_trait::async_trait;
use futures_util::Stream;
use tracing::debug;

use crate::models::{model_stream, ModelInfo, ModelPage};
use crate::{AiError, Generation, ModelCatalog, TextGenerator};

use super::client::{parse_generate_response, parse_models_page, status_error, GeminiClient};

impl GeminiClient {
    /// Lazily enumerate every model visible to the configured key.
    ///
    /// Each poll past the end of a page fetches the next one; the stream is
    /// consumed once and ends after the last page or the first error.
    pub fn list_models(&self) -> impl Stream<Item = Result<ModelInfo, AiError>> + Send + '_ {
        model_stream(self)
    }

    async fn send_checked(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, AiError> {
        let response = request
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &text));
        }

        response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Generation, AiError> {
        let body = self.build_request_body(prompt);

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "Gemini generate request");

        let request = self
            .http
            .post(self.generate_url())
            .header("content-type", "application/json")
            .json(&body);
        let json = self.send_checked(request).await?;

        parse_generate_response(&json)
    }
}

#[async_trait]
impl ModelCatalog for GeminiClient {
    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ModelPage, AiError> {
        let mut query = vec![("pageSize", self.config.page_size.to_string())];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        debug!(page_token = ?page_token, "Gemini list models request");

        let request = self.http.get(self.list_url()).query(&query);
        let json = self.send_checked(request).await?;

        parse_models_page(json)
    }
}
