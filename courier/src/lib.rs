//! Headless client core for forwarding posts into conversations and rendering avatars.

pub mod alert;
pub mod api;
pub mod avatar;
pub mod client;
pub mod error;
pub mod models;
pub mod navigation;
pub mod picker;

// Re-export main types
pub use client::{AuthInfo, CourierClient, CourierClientBuilder, HttpConfig};
pub use error::{Error, ErrorCategory, Result};

// Re-export commonly used models
pub use models::{
    AuthorProfile, Conversation, ConversationId, ForwardPayload, ForwardedPost, Participant, Post,
    PostAuthor, PostId, UserId,
};

// Re-export component types
pub use alert::{Alerter, LogAlerter};
pub use api::MessagingBackend;
pub use avatar::{AvatarFrame, AvatarSize, AvatarView, ImageResolver, DEFAULT_PROFILE_IMAGE};
pub use navigation::{LogNavigator, Navigator, Route};
pub use picker::{
    ConversationRow, FetchTicket, ForwardOutcome, ForwardPicker, ForwardTicket, Phase,
    PickerContext, PostPreview,
};
