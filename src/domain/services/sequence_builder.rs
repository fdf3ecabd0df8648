//! Reconciles an untyped conversation history into the role-tagged,
//! alternating message sequence the chat completions API requires.

use crate::domain::models::{Message, Role};

/// Build the wire message sequence for one completion request.
///
/// The sequence always starts with a single system message carrying
/// `system_prompt`, followed by the history with roles assigned positionally
/// (index 0 → user, index 1 → assistant, alternating strictly), and ends with
/// `user_input` as a user message.
///
/// Positional role assignment is a policy, not a guarantee: the history
/// stores no roles, so the caller must supply turns in strict user/assistant
/// alternation (see [`crate::domain::Transcript::record_exchange`]). An
/// odd-length history therefore produces two consecutive user messages at
/// the end of the sequence. That is the defined behavior and is pinned by
/// tests; it is not silently repaired here.
///
/// The builder is total: any history (including empty) and any input
/// (including the empty string) produce a valid sequence. Pure function of
/// its arguments; the result is built fresh per request and never cached.
pub fn build_sequence(system_prompt: &str, history: &[String], user_input: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);

    messages.push(Message::system(system_prompt));

    for (index, turn) in history.iter().enumerate() {
        let role = if index % 2 == 0 {
            Role::User
        } else {
            Role::Assistant
        };
        messages.push(Message::new(role, turn.clone()));
    }

    messages.push(Message::user(user_input));

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "You are a legal assistant.";

    fn history(turns: &[&str]) -> Vec<String> {
        turns.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_history_yields_system_then_user() {
        let messages = build_sequence(PROMPT, &[], "What is bail?");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::system(PROMPT));
        assert_eq!(messages[1], Message::user("What is bail?"));
    }

    #[test]
    fn even_history_alternates_and_ends_with_user() {
        let messages = build_sequence(PROMPT, &history(&["Q1", "A1"]), "Q2");

        let roles: Vec<Role> = messages.iter().map(|m| m.role()).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(messages[1], Message::user("Q1"));
        assert_eq!(messages[2], Message::assistant("A1"));
        assert_eq!(messages[3], Message::user("Q2"));
    }

    #[test]
    fn odd_history_produces_adjacent_user_messages() {
        // Defined behavior, not a bug: the newest input is always tagged
        // user even when the positional alternation would assign assistant
        // next.
        let messages = build_sequence(PROMPT, &history(&["Q1"]), "Q2");

        let roles: Vec<Role> = messages.iter().map(|m| m.role()).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::User]);
        assert_eq!(messages[1].content(), "Q1");
        assert_eq!(messages[2].content(), "Q2");
    }

    #[test]
    fn longer_history_keeps_strict_alternation() {
        let messages = build_sequence(PROMPT, &history(&["Q1", "A1", "Q2", "A2"]), "Q3");

        for (i, message) in messages[1..messages.len() - 1].iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(message.role(), expected, "turn {i}");
        }
        assert_eq!(messages.last().unwrap().role(), Role::User);
    }

    #[test]
    fn construction_is_idempotent() {
        let turns = history(&["Q1", "A1", "Q2"]);
        let first = build_sequence(PROMPT, &turns, "Q3");
        let second = build_sequence(PROMPT, &turns, "Q3");

        assert_eq!(first, second);
    }

    #[test]
    fn system_message_is_first_and_singular_for_any_length() {
        let turns = history(&["Q1", "A1", "Q2", "A2", "Q3", "A3", "Q4"]);

        for n in 0..=turns.len() {
            let messages = build_sequence(PROMPT, &turns[..n], "next");

            assert_eq!(messages[0].role(), Role::System, "history length {n}");
            let system_count = messages
                .iter()
                .filter(|m| m.role() == Role::System)
                .count();
            assert_eq!(system_count, 1, "history length {n}");
        }
    }

    #[test]
    fn empty_user_input_is_forwarded_as_is() {
        let messages = build_sequence(PROMPT, &[], "");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], Message::user(""));
    }
}
