//! Async submit for ChatSession.

use tracing::{debug, warn};

use crate::conversation::Turn;
use crate::TextGenerator;

use super::manager::ChatSession;
use super::types::ChatError;

impl ChatSession {
    /// Record the user's message, ask the model, and record its reply.
    ///
    /// The prompt is the context window over the turns *before* this message,
    /// followed by the message itself. On failure the user turn stays in the
    /// log and no model turn is added.
    pub async fn submit(
        &mut self,
        client: &dyn TextGenerator,
        user_text: impl Into<String>,
    ) -> Result<String, ChatError> {
        let user_text = user_text.into();

        let window = self.context_window();
        let prompt = window.render_prompt(&user_text);
        debug!(
            session = %self.id.short(),
            window = window.len(),
            memory = self.log.len(),
            "submitting turn"
        );

        self.log.push(Turn::user(user_text));

        match client.generate(&prompt).await {
            Ok(generation) => {
                let model = generation.model_version.as_deref().unwrap_or("unknown");
                self.tracker.record(model, &generation.usage);
                self.log.push(Turn::model(generation.text.clone()));
                Ok(generation.text)
            }
            Err(e) => {
                warn!(session = %self.id.short(), "generation failed: {e}");
                Err(ChatError::from(e))
            }
        }
    }
}
