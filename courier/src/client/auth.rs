//! Identity supplied by the surrounding application.

use crate::models::UserId;

/// Authentication information for the messaging backend.
///
/// The token is sent verbatim in the `Authorization` header; the user id is
/// used to tell the current user apart from the other conversation member.
#[derive(Debug, Clone)]
pub struct AuthInfo {
    /// Access token.
    pub token: String,
    /// User ID.
    pub uid: String,
}

impl AuthInfo {
    /// Create new auth info.
    pub fn new(token: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            uid: uid.into(),
        }
    }

    /// Check if auth looks valid.
    pub fn is_valid(&self) -> bool {
        !self.token.trim().is_empty() && !self.uid.trim().is_empty()
    }

    /// The current user's id.
    pub fn user_id(&self) -> UserId {
        UserId::from(&self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_info_validity() {
        let valid = AuthInfo::new("token123", "64f0c1");
        assert!(valid.is_valid());

        let empty_token = AuthInfo::new("", "64f0c1");
        assert!(!empty_token.is_valid());

        let blank_uid = AuthInfo::new("token123", "  ");
        assert!(!blank_uid.is_valid());
    }

    #[test]
    fn test_user_id() {
        let auth = AuthInfo::new("token123", "64f0c1");
        assert_eq!(auth.user_id().as_str(), "64f0c1");
    }
}
