//! Type-safe ID wrappers.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                $name(id.into())
            }

            /// Check if this ID is empty or blank.
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Get the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_owned())
            }
        }

        impl From<&String> for $name {
            fn from(s: &String) -> Self {
                $name(s.clone())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

define_id!(ConversationId, "A conversation identifier.");
define_id!(PostId, "A post identifier.");
define_id!(UserId, "A user identifier.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = PostId::new("65a1f0");
        assert_eq!(id.as_str(), "65a1f0");
        assert_eq!(format!("{}", id), "65a1f0");
    }

    #[test]
    fn test_id_is_empty() {
        assert!(PostId::new("").is_empty());
        assert!(PostId::new("  ").is_empty());
        assert!(PostId::default().is_empty());
        assert!(!PostId::new("p1").is_empty());
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: UserId = serde_json::from_str(r#""u1""#).unwrap();
        assert_eq!(id, UserId::from("u1"));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""u1""#);
    }
}
