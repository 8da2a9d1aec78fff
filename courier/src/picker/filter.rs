//! Conversation search.

use crate::models::{Conversation, UserId};

/// Filter `conversations` by the other participant's name.
///
/// Matching is a case-insensitive substring test. A blank query returns the list
/// unchanged. Conversations whose other participant cannot be resolved, or has no
/// name, never match a non-blank query.
pub fn filter_conversations(
    conversations: &[Conversation],
    query: &str,
    current_user: &UserId,
) -> Vec<Conversation> {
    if query.trim().is_empty() {
        return conversations.to_vec();
    }

    let needle = query.to_lowercase();
    conversations
        .iter()
        .filter(|conv| matches_query(conv, &needle, current_user))
        .cloned()
        .collect()
}

/// `needle` must already be lower-cased.
fn matches_query(conversation: &Conversation, needle: &str, current_user: &UserId) -> bool {
    conversation
        .other_participant(current_user)
        .and_then(|p| p.display_name())
        .map_or(false, |name| name.to_lowercase().contains(needle))
}
