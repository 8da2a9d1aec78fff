//! Command definitions.

pub mod avatar;
pub mod conversation;
pub mod forward;
pub mod post;
