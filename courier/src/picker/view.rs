//! Render-ready snapshots of the picker.

use crate::avatar::{AvatarSize, AvatarView, ImageResolver};
use crate::models::{image_badge, Conversation, ConversationId, Post, UserId};

/// Preview text shown when the post has no content.
pub const NO_CONTENT: &str = "No content";

/// One selectable entry in the conversation list.
#[derive(Debug, Clone)]
pub struct ConversationRow {
    /// Conversation to select when the row is picked.
    pub conversation_id: ConversationId,
    /// Other participant's name; empty when the backend sent none.
    pub name: String,
    /// Other participant's role, "User" when unset.
    pub role: String,
    /// Other participant's photo at the `md` size.
    pub avatar: AvatarView,
    /// Whether this row is the current selection.
    pub selected: bool,
}

impl ConversationRow {
    /// Build a row, or `None` when the conversation has no other participant.
    pub fn build(
        conversation: &Conversation,
        current_user: &UserId,
        images: &ImageResolver,
        selected: Option<&ConversationId>,
    ) -> Option<Self> {
        let other = conversation.other_participant(current_user)?;
        let name = other.display_name().unwrap_or_default().to_owned();
        let avatar = AvatarView::new(
            images.clone(),
            other.profile_photo_url.clone(),
            AvatarSize::Md,
        )
        .with_alt(name.clone());

        Some(Self {
            conversation_id: conversation.id.clone(),
            name,
            role: other.role_label().to_owned(),
            avatar,
            selected: selected == Some(&conversation.id),
        })
    }
}

/// Summary of the post being forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPreview {
    /// Author name, or "Unknown User".
    pub author: String,
    /// Post text, or "No content".
    pub content: String,
    /// "1 image" / "N images"; absent without images.
    pub image_badge: Option<String>,
    /// Whether "view original post" leads anywhere.
    pub can_view_original: bool,
}

impl PostPreview {
    /// Summarize `post`.
    pub fn from_post(post: &Post) -> Self {
        Self {
            author: post.display_author().to_owned(),
            content: post
                .content
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| NO_CONTENT.to_owned()),
            image_badge: image_badge(post.image_count()),
            can_view_original: post.is_linkable(),
        }
    }
}
