use async_trait::async_trait;

use crate::domain::{CompletionOptions, DomainError, Message};

/// A hosted chat completion endpoint.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::GetResponseUseCase`]) remain
/// decoupled from any particular provider or HTTP client library.
///
/// The handle behind this trait is initialized once, is immutable afterwards,
/// and may be shared freely across concurrent requests.
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    /// Submit a role-tagged message sequence and return the top candidate's
    /// reply text, unparsed.
    ///
    /// Any transport, authentication, quota, or malformed-response failure
    /// surfaces as [`DomainError::Provider`]. No retries, no fallback text.
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, DomainError>;
}
