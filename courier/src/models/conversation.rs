//! Conversation models.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ConversationId, UserId};

/// Role label shown when a participant has none.
pub const DEFAULT_ROLE: &str = "User";

/// A member of a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// User ID.
    #[serde(rename = "_id", default)]
    pub id: UserId,
    /// Display name.
    pub name: Option<String>,
    /// Role label, e.g. "Mentor".
    pub role: Option<String>,
    /// Profile photo reference: absolute URL, root-relative or bare relative path.
    pub profile_photo_url: Option<String>,
}

impl Participant {
    /// Display name, if present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Role label with the default applied.
    pub fn role_label(&self) -> &str {
        self.role
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_ROLE)
    }
}

/// A conversation the current user takes part in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation ID.
    #[serde(rename = "_id")]
    pub id: ConversationId,
    /// Members in backend order. Null entries are dropped on decode.
    #[serde(default, deserialize_with = "deserialize_participants")]
    pub participants: Vec<Participant>,
}

impl Conversation {
    /// The first participant who is not the current user.
    pub fn other_participant(&self, current_user: &UserId) -> Option<&Participant> {
        other_participant(self, current_user)
    }

    /// Whether the conversation can be picked as a forward target.
    pub fn is_selectable(&self, current_user: &UserId) -> bool {
        self.other_participant(current_user).is_some()
    }
}

/// Find the first participant whose id differs from `current_user`.
pub fn other_participant<'a>(
    conversation: &'a Conversation,
    current_user: &UserId,
) -> Option<&'a Participant> {
    conversation
        .participants
        .iter()
        .find(|p| p.id != *current_user)
}

fn deserialize_participants<'de, D>(deserializer: D) -> Result<Vec<Participant>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<Participant>>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default().into_iter().flatten().collect())
}
