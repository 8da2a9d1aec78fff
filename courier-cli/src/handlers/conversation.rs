//! Conversation handlers.

use colored::Colorize;
use courier::{ConversationRow, ForwardPicker, Post};
use serde::Serialize;

use crate::output::{PlainPrint, TableRow};

/// Conversation info for display.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationInfo {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl From<&ConversationRow> for ConversationInfo {
    fn from(row: &ConversationRow) -> Self {
        Self {
            id: row.conversation_id.to_string(),
            name: row.name.clone(),
            role: row.role.clone(),
            avatar: row.avatar.frame().src,
        }
    }
}

impl TableRow for ConversationInfo {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "With", "Role", "Avatar"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.role.clone(),
            self.avatar.clone(),
        ]
    }
}

impl PlainPrint for ConversationInfo {
    fn plain_print(&self) {
        println!(
            "[{}] {} {}",
            self.id.cyan(),
            self.name.green(),
            format!("({})", self.role).dimmed()
        );
        println!("   {}", self.avatar.dimmed());
    }
}

/// Conversation list result.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationListResult {
    pub query: Option<String>,
    pub total: usize,
    pub conversations: Vec<ConversationInfo>,
}

/// Load conversations through a picker session and apply the optional search.
///
/// A failed fetch lists nothing, as the picker would show it.
pub async fn list_conversations(
    picker: &mut ForwardPicker,
    search: Option<&str>,
) -> ConversationListResult {
    picker.open(Post::default()).await;
    if let Some(query) = search {
        picker.set_search_query(query);
    }

    let result = ConversationListResult {
        query: search.map(str::to_owned),
        total: picker.conversations().len(),
        conversations: picker.rows().iter().map(ConversationInfo::from).collect(),
    };
    picker.close();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use courier::{
        Conversation, Error, ForwardPayload, ImageResolver, MessagingBackend, Participant,
        PickerContext,
    };
    use pretty_assertions::assert_eq;

    struct StaticBackend(Option<Vec<Conversation>>);

    #[async_trait]
    impl MessagingBackend for StaticBackend {
        async fn list_conversations(&self) -> courier::Result<Vec<Conversation>> {
            self.0
                .clone()
                .ok_or_else(|| Error::api(500, "Internal Server Error"))
        }

        async fn create_message(&self, _payload: &ForwardPayload) -> courier::Result<()> {
            Ok(())
        }
    }

    fn picker(conversations: Option<Vec<Conversation>>) -> ForwardPicker {
        ForwardPicker::new(
            Arc::new(StaticBackend(conversations)),
            PickerContext {
                current_user: "me".into(),
                app_origin: "https://app.example".into(),
                images: ImageResolver::new("https://api.example"),
            },
        )
    }

    fn conversation(id: &str, uid: &str, name: &str) -> Conversation {
        Conversation {
            id: id.into(),
            participants: vec![
                Participant {
                    id: "me".into(),
                    ..Default::default()
                },
                Participant {
                    id: uid.into(),
                    name: Some(name.into()),
                    ..Default::default()
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_search_narrows_rows() {
        let mut picker = picker(Some(vec![
            conversation("c1", "u1", "Alice"),
            conversation("c2", "u2", "Bob"),
        ]));

        let result = list_conversations(&mut picker, Some("bo")).await;

        assert_eq!(result.total, 2);
        let names: Vec<&str> = result.conversations.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bob"]);
        assert!(!picker.is_open());
    }

    #[tokio::test]
    async fn test_backend_error_lists_nothing() {
        let mut picker = picker(None);

        let result = list_conversations(&mut picker, None).await;

        assert_eq!(result.total, 0);
        assert!(result.conversations.is_empty());
    }
}
