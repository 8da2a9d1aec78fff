//! Data models for messaging entities.

mod conversation;
mod forward;
mod ids;
mod post;

pub use conversation::{other_participant, Conversation, Participant, DEFAULT_ROLE};
pub use forward::{compose_body, image_badge, ForwardPayload, ForwardedPost};
pub use ids::{ConversationId, PostId, UserId};
pub use post::{AuthorProfile, Post, PostAuthor, UNKNOWN_AUTHOR};
