use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::application::ChatCompletionProvider;
use crate::domain::{build_sequence, CompletionOptions, DomainError};

/// System instruction prepended to every request. Fixed configuration text,
/// never derived from input.
const SYSTEM_PROMPT: &str = "\
You are an expert legal assistant focusing on Indian law. \
Provide clear, accurate legal guidance based on the context.";

/// Answers the newest user utterance given the prior conversation history.
///
/// Builds the wire message sequence (one system message, positionally
/// role-tagged history, the newest input as a final user message), performs
/// exactly one provider call, and returns the reply text. The builder step is
/// pure and the provider handle is shared immutably, so any number of
/// requests may run concurrently through one instance.
pub struct GetResponseUseCase {
    provider: Arc<dyn ChatCompletionProvider>,
    options: CompletionOptions,
    system_prompt: String,
}

impl GetResponseUseCase {
    pub fn new(provider: Arc<dyn ChatCompletionProvider>, options: CompletionOptions) -> Self {
        Self {
            provider,
            options,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }

    /// Override the fixed system instruction (e.g. for a different
    /// jurisdiction).
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Forward the conversation to the completion provider and return the
    /// reply.
    ///
    /// `history` must hold prior turns oldest first, alternating strictly
    /// user/assistant; roles are reconstructed positionally. Failures from
    /// the provider are logged with their error message and propagated
    /// unmodified in meaning — no retry, no fallback reply.
    pub async fn execute(
        &self,
        history: &[String],
        user_input: &str,
    ) -> Result<String, DomainError> {
        let messages = build_sequence(&self.system_prompt, history, user_input);

        debug!(
            "Requesting completion: model={}, messages={}",
            self.options.model(),
            messages.len()
        );

        let start_time = Instant::now();
        match self.provider.complete(&messages, &self.options).await {
            Ok(reply) => {
                info!(
                    "Completion returned {} chars in {:.2}s",
                    reply.len(),
                    start_time.elapsed().as_secs_f64()
                );
                Ok(reply)
            }
            Err(e) => {
                error!("Chat completion failed: {e}");
                Err(e)
            }
        }
    }
}
