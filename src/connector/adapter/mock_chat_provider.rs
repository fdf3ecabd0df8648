use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatCompletionProvider;
use crate::domain::{CompletionOptions, DomainError, Message};

/// A [`ChatCompletionProvider`] that never touches the network.
///
/// Returns a canned reply (or a canned failure) and records every sequence it
/// receives, so tests can assert both the wire contract and the exact number
/// of attempted calls. Also backs the CLI's `--mock` flag for offline runs.
pub struct MockChatProvider {
    reply: Result<String, String>,
    calls: AtomicUsize,
    received: Mutex<Vec<Vec<Message>>>,
}

impl MockChatProvider {
    /// A provider that answers every request with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    /// A provider whose every call fails with a provider error carrying
    /// `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Number of completion calls attempted so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The message sequence received by the most recent call, if any.
    pub fn last_sequence(&self) -> Option<Vec<Message>> {
        self.received
            .lock()
            .expect("mock provider lock poisoned")
            .last()
            .cloned()
    }
}

#[async_trait]
impl ChatCompletionProvider for MockChatProvider {
    async fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received
            .lock()
            .expect("mock provider lock poisoned")
            .push(messages.to_vec());

        debug!(
            "MockChatProvider: received {} messages for model {}",
            messages.len(),
            options.model()
        );

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(DomainError::provider(message.clone())),
        }
    }
}
