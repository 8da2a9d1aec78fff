//! Forwarded-post message payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ConversationId, Post, PostId};

/// Structured record of the original post carried inside a forwarded message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardedPost {
    /// Id of the original post.
    pub post_id: PostId,
    /// The post's text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_content: Option<String>,
    /// The post's image references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Author name, without the "Unknown User" fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Absolute link to the post detail page.
    pub post_link: String,
    /// The post's `createdAt`, passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    /// Always true: the recipient can open the original post.
    pub is_clickable: bool,
    /// Always true: the record was built from the post itself.
    pub verified: bool,
}

impl ForwardedPost {
    /// Build the record for `post`, linking to `post_link`.
    pub fn from_post(post: &Post, post_link: impl Into<String>) -> Self {
        Self {
            post_id: post.id.clone(),
            original_content: post.content.clone(),
            images: post.images.clone(),
            author: post.author_name().map(str::to_owned),
            post_link: post_link.into(),
            created_at: post.created_at.clone(),
            is_clickable: true,
            verified: true,
        }
    }
}

/// Body of the message-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardPayload {
    /// Target conversation.
    pub conversation_id: ConversationId,
    /// Human-readable message body.
    pub content: String,
    /// Structured record of the original post.
    pub forwarded_post: ForwardedPost,
}

impl ForwardPayload {
    /// Assemble the payload forwarding `post` into `conversation_id`.
    pub fn new(conversation_id: ConversationId, post: &Post, post_link: &str) -> Self {
        Self {
            conversation_id,
            content: compose_body(post, post_link),
            forwarded_post: ForwardedPost::from_post(post, post_link),
        }
    }
}

/// Human-readable message body for a forwarded post.
pub fn compose_body(post: &Post, post_link: &str) -> String {
    let images = match post.image_count() {
        0 => String::new(),
        n => format!("🖼️ {} image(s) attached\n\n", n),
    };

    format!(
        "📌 *Forwarded Post*\n\n{}\n\n{}👤 Originally posted by: {}\n\n🔗 View original post: {}",
        post.content_or_empty(),
        images,
        post.display_author(),
        post_link
    )
}

/// Badge text for the preview: "1 image", "3 images".
pub fn image_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 image".to_owned()),
        n => Some(format!("{} images", n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthorProfile, PostAuthor};
    use pretty_assertions::assert_eq;

    fn sample_post() -> Post {
        Post {
            id: "p1".into(),
            author: Some(PostAuthor::Profile(AuthorProfile {
                name: Some("Alice".into()),
                ..Default::default()
            })),
            content: Some("hi".into()),
            images: Some(vec!["a.png".into(), "b.png".into()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_compose_body() {
        let body = compose_body(&sample_post(), "https://app.example/post/p1");

        assert_eq!(
            body,
            "📌 *Forwarded Post*\n\nhi\n\n🖼️ 2 image(s) attached\n\n👤 Originally posted by: Alice\n\n🔗 View original post: https://app.example/post/p1"
        );
        assert_eq!(body.matches("2 image(s)").count(), 1);
    }

    #[test]
    fn test_compose_body_without_images_or_author() {
        let post = Post {
            id: "p2".into(),
            ..Default::default()
        };
        let body = compose_body(&post, "https://app.example/post/p2");

        assert!(!body.contains("image(s)"));
        assert!(body.contains("Originally posted by: Unknown User"));
        assert!(body.starts_with("📌 *Forwarded Post*\n\n\n\n👤"));
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = ForwardPayload::new("c1".into(), &sample_post(), "https://app.example/post/p1");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["conversationId"], "c1");
        assert_eq!(value["forwardedPost"]["postId"], "p1");
        assert_eq!(value["forwardedPost"]["originalContent"], "hi");
        assert_eq!(value["forwardedPost"]["author"], "Alice");
        assert_eq!(value["forwardedPost"]["postLink"], "https://app.example/post/p1");
        assert_eq!(value["forwardedPost"]["isClickable"], true);
        assert_eq!(value["forwardedPost"]["verified"], true);
        assert!(value["forwardedPost"].get("createdAt").is_none());
    }

    #[test]
    fn test_payload_keeps_original_timestamp() {
        let post: Post = serde_json::from_str(
            r#"{"_id": "p1", "createdAt": "2024-03-01T10:15:00.000Z"}"#,
        )
        .unwrap();
        let payload = ForwardPayload::new("c1".into(), &post, "https://app.example/post/p1");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value["forwardedPost"]["createdAt"],
            "2024-03-01T10:15:00.000Z"
        );

        let millis: Post =
            serde_json::from_str(r#"{"_id": "p1", "createdAt": 1709288100000}"#).unwrap();
        let payload = ForwardPayload::new("c1".into(), &millis, "https://app.example/post/p1");
        assert_eq!(
            serde_json::to_value(&payload).unwrap()["forwardedPost"]["createdAt"],
            1709288100000_i64
        );
    }

    #[test]
    fn test_image_badge() {
        assert_eq!(image_badge(0), None);
        assert_eq!(image_badge(1).as_deref(), Some("1 image"));
        assert_eq!(image_badge(4).as_deref(), Some("4 images"));
    }
}
