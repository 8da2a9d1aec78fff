//! Avatar handlers.

use colored::Colorize;
use courier::{AvatarSize, AvatarView, ImageResolver, DEFAULT_PROFILE_IMAGE};
use rust_i18n::t;
use serde::Serialize;

use crate::output::PlainPrint;

/// Resolved avatar.
#[derive(Debug, Clone, Serialize)]
pub struct AvatarInfo {
    pub reference: Option<String>,
    pub src: String,
    pub size: String,
    pub pixels: u32,
    pub placeholder: bool,
}

impl PlainPrint for AvatarInfo {
    fn plain_print(&self) {
        println!("{}", self.src.cyan());
        println!(
            "   {}",
            t!("avatar_size", size = &self.size, px = self.pixels).dimmed()
        );
        if self.placeholder {
            println!("   {}", t!("avatar_placeholder").yellow());
        }
    }
}

/// Resolve an avatar reference the way the view would on first render.
///
/// Unknown size names fall back to `md`.
pub fn resolve_avatar(resolver: ImageResolver, reference: Option<String>, size: &str) -> AvatarInfo {
    let size = AvatarSize::parse_or_default(size);
    let view = AvatarView::new(resolver, reference.clone(), size);
    let frame = view.frame();

    AvatarInfo {
        reference,
        placeholder: frame.src == DEFAULT_PROFILE_IMAGE,
        src: frame.src,
        size: size.to_string(),
        pixels: frame.pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative() {
        let info = resolve_avatar(
            ImageResolver::new("https://api.example"),
            Some("u/1.png".into()),
            "lg",
        );

        assert_eq!(info.src, "https://api.example/u/1.png");
        assert_eq!(info.pixels, 48);
        assert!(!info.placeholder);
    }

    #[test]
    fn test_resolve_missing() {
        let info = resolve_avatar(ImageResolver::new("https://api.example"), None, "md");
        assert!(info.placeholder);
    }

    #[test]
    fn test_unknown_size_falls_back_to_md() {
        let info = resolve_avatar(ImageResolver::new("https://api.example"), None, "huge");
        assert_eq!(info.size, "md");
        assert_eq!(info.pixels, 40);
    }
}
