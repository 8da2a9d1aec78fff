//! Conversation API.

use std::sync::Arc;

use serde::Deserialize;

use crate::{client::CourierClientInner, error::Result, models::Conversation};

/// Endpoint listing the authenticated user's conversations.
pub const CONVERSATIONS_ENDPOINT: &str = "api/messages/conversations";

/// API for conversation listing.
pub struct ConversationApi {
    client: Arc<CourierClientInner>,
}

impl ConversationApi {
    pub(crate) fn new(client: Arc<CourierClientInner>) -> Self {
        Self { client }
    }

    /// List the current user's conversations.
    ///
    /// A non-2xx answer is an [`Error::Api`](crate::Error::Api); an envelope with
    /// `success: false` yields an empty list.
    pub async fn list(&self) -> Result<Vec<Conversation>> {
        let envelope: ConversationEnvelope = self.client.get_authed(CONVERSATIONS_ENDPOINT).await?;
        Ok(envelope.into_conversations())
    }
}

/// Response envelope of the listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConversationEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    conversations: Option<Vec<Conversation>>,
    #[serde(default)]
    message: Option<String>,
}

impl ConversationEnvelope {
    pub(crate) fn into_conversations(self) -> Vec<Conversation> {
        if !self.success {
            log::warn!(
                "conversation listing unsuccessful: {}",
                self.message.as_deref().unwrap_or("no message")
            );
            return Vec::new();
        }
        self.conversations.unwrap_or_default()
    }
}
