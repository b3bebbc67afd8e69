use crate::types::{ChatMessage, Role};

/// Make sure the conversation opens with a system instruction
///
/// A conversation whose first turn is already a system message is returned
/// unchanged. Otherwise, including when it is empty, `persona` is prepended.
pub fn with_persona(messages: Vec<ChatMessage>, persona: &str) -> Vec<ChatMessage> {
    if messages.first().is_some_and(|m| m.role == Role::System) {
        return messages;
    }

    let mut forwarded = Vec::with_capacity(messages.len() + 1);
    forwarded.push(ChatMessage::system(persona));
    forwarded.extend(messages);
    forwarded
}
