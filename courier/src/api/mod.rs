//! API modules.

mod conversation;
mod message;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Conversation, ForwardPayload};

pub use conversation::{ConversationApi, CONVERSATIONS_ENDPOINT};
pub use message::{MessageApi, MESSAGES_ENDPOINT};

/// The two backend calls the forward picker depends on.
#[async_trait]
pub trait MessagingBackend: Send + Sync {
    /// List the current user's conversations.
    async fn list_conversations(&self) -> Result<Vec<Conversation>>;

    /// Create a message carrying a forwarded post.
    async fn create_message(&self, payload: &ForwardPayload) -> Result<()>;
}
