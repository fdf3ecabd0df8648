use serde::{Deserialize, Serialize};

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 800;
const DEFAULT_TOP_P: f32 = 0.95;

/// Sampling options for a chat completion call.
///
/// The model identifier travels here rather than in the provider handle so
/// the handle stays immutable after initialization. The sampling defaults
/// are fixed per deployment, not derived from request content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionOptions {
    model: String,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

impl CompletionOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        // A zero cap would reject every completion at the provider.
        self.max_tokens = max_tokens.max(1);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn top_p(&self) -> f32 {
        self.top_p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment_settings() {
        let options = CompletionOptions::new("gpt-4");
        assert_eq!(options.model(), "gpt-4");
        assert_eq!(options.temperature(), 0.7);
        assert_eq!(options.max_tokens(), 800);
        assert_eq!(options.top_p(), 0.95);
    }

    #[test]
    fn sampling_overrides_apply() {
        let options = CompletionOptions::new("gpt-4")
            .with_temperature(0.2)
            .with_max_tokens(256)
            .with_top_p(1.0);

        assert_eq!(options.temperature(), 0.2);
        assert_eq!(options.max_tokens(), 256);
        assert_eq!(options.top_p(), 1.0);
    }

    #[test]
    fn with_max_tokens_enforces_minimum() {
        let options = CompletionOptions::new("gpt-4").with_max_tokens(0);
        assert_eq!(options.max_tokens(), 1);
    }
}
