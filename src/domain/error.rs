use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Missing or rejected connection parameters at initialization.
    /// Fatal to the session: no completion call may be attempted.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A completion call failed: transport, authentication, quota, or a
    /// malformed response. Propagated to the caller, never swallowed.
    #[error("Provider error: {0}")]
    Provider(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}
