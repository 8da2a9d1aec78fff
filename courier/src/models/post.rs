//! Post models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PostId, UserId};

/// Author name used when a post carries neither a profile name nor a username.
pub const UNKNOWN_AUTHOR: &str = "Unknown User";

/// A post as delivered by the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post ID. Empty when the feed sent none.
    #[serde(rename = "_id", default)]
    pub id: PostId,
    /// Author, either populated or as a bare id.
    #[serde(rename = "userId")]
    pub author: Option<PostAuthor>,
    /// Fallback author handle.
    pub username: Option<String>,
    /// Text content.
    pub content: Option<String>,
    /// Image references in display order.
    pub images: Option<Vec<String>>,
    /// Creation time exactly as the backend sent it.
    pub created_at: Option<Value>,
}

/// The `userId` field of a post: a populated profile or an unpopulated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostAuthor {
    /// Populated author profile.
    Profile(AuthorProfile),
    /// Bare author id.
    Id(UserId),
}

/// Populated author profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    /// User ID.
    #[serde(rename = "_id")]
    pub id: Option<UserId>,
    /// Display name.
    pub name: Option<String>,
    /// Profile photo reference.
    pub profile_photo_url: Option<String>,
}

impl Post {
    /// Author name: profile name, else username. Empty strings count as absent.
    pub fn author_name(&self) -> Option<&str> {
        let profile_name = match &self.author {
            Some(PostAuthor::Profile(profile)) => profile.name.as_deref(),
            _ => None,
        };

        profile_name
            .filter(|n| !n.is_empty())
            .or_else(|| self.username.as_deref().filter(|n| !n.is_empty()))
    }

    /// Author name with the "Unknown User" fallback applied.
    pub fn display_author(&self) -> &str {
        self.author_name().unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Number of attached images.
    pub fn image_count(&self) -> usize {
        self.images.as_ref().map_or(0, Vec::len)
    }

    /// Content, or an empty string.
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Creation time, when it is an RFC 3339 string or epoch milliseconds.
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        match self.created_at.as_ref()? {
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .map(|t| t.with_timezone(&Utc))
                .ok()
                .or_else(|| s.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)),
            Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
            _ => None,
        }
    }

    /// Whether the post has an id that can be linked to.
    pub fn is_linkable(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_populated_author() {
        let json = r#"{
            "_id": "p1",
            "userId": {"_id": "u1", "name": "Alice"},
            "content": "hi",
            "images": ["a.png", "b.png"],
            "createdAt": "2024-03-01T10:15:00.000Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.display_author(), "Alice");
        assert_eq!(post.image_count(), 2);
        assert_eq!(
            post.created_at,
            Some(Value::from("2024-03-01T10:15:00.000Z"))
        );
        assert_eq!(
            post.created_time().map(|t| t.to_rfc3339()),
            Some("2024-03-01T10:15:00+00:00".to_owned())
        );
    }

    #[test]
    fn test_decode_without_id() {
        let post: Post = serde_json::from_str(r#"{"content": "hi"}"#).unwrap();
        assert!(post.id.is_empty());
        assert!(!post.is_linkable());
        assert_eq!(post.content_or_empty(), "hi");
    }

    #[test]
    fn test_epoch_millis_timestamps() {
        let as_string: Post =
            serde_json::from_str(r#"{"_id": "p1", "createdAt": "1709288100000"}"#).unwrap();
        let as_number: Post =
            serde_json::from_str(r#"{"_id": "p1", "createdAt": 1709288100000}"#).unwrap();

        let expected = DateTime::from_timestamp_millis(1_709_288_100_000);
        assert_eq!(as_string.created_time(), expected);
        assert_eq!(as_number.created_time(), expected);

        let garbled: Post =
            serde_json::from_str(r#"{"_id": "p1", "createdAt": "last tuesday"}"#).unwrap();
        assert_eq!(garbled.created_time(), None);
    }

    #[test]
    fn test_decode_bare_author_id() {
        let json = r#"{"_id": "p2", "userId": "u1", "username": "bob"}"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.author, Some(PostAuthor::Id("u1".into())));
        assert_eq!(post.display_author(), "bob");
    }

    #[test]
    fn test_author_fallbacks() {
        let unnamed = Post {
            id: "p3".into(),
            author: Some(PostAuthor::Profile(AuthorProfile {
                name: Some(String::new()),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(unnamed.author_name(), None);
        assert_eq!(unnamed.display_author(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_content_and_images_absent() {
        let post = Post {
            id: "p4".into(),
            ..Default::default()
        };
        assert_eq!(post.content_or_empty(), "");
        assert_eq!(post.image_count(), 0);
        assert!(post.is_linkable());
        assert!(!Post::default().is_linkable());
    }
}
