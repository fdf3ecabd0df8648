use serde::{Deserialize, Serialize};

/// An ordered record of past conversation turns, oldest first.
///
/// Turns are stored as plain text with no role attached; the sequence builder
/// infers roles positionally (even index → user, odd index → assistant).
/// That inference is only meaningful when the transcript actually alternates,
/// so prefer [`Transcript::record_exchange`], which appends a user turn and
/// the assistant reply together and keeps the alternation true by
/// construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Build a transcript from pre-ordered turns. The caller is responsible
    /// for supplying strict user/assistant alternation.
    pub fn from_turns(turns: Vec<String>) -> Self {
        Self { turns }
    }

    /// Record one completed exchange: the user's utterance followed by the
    /// assistant's reply.
    pub fn record_exchange(&mut self, user_input: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(user_input.into());
        self.turns.push(reply.into());
    }

    pub fn turns(&self) -> &[String] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
