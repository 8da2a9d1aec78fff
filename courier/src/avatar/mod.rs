//! Avatar view: resolves a profile image reference and tracks its load state.
//!
//! The view is headless. An embedder renders [`AvatarView::frame`] and feeds the
//! image element's load and error events back through
//! [`AvatarView::on_load_success`] and [`AvatarView::on_load_failure`].

mod resolve;
mod size;

pub use resolve::{ImageResolver, DEFAULT_PROFILE_IMAGE};
pub use size::AvatarSize;

/// Alt text used when none is given.
pub const DEFAULT_ALT: &str = "Profile";

/// What an embedder should draw for an avatar right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFrame {
    /// Source for the image element.
    pub src: String,
    /// Alt text, never empty.
    pub alt: String,
    /// Edge length in pixels, shared by the skeleton and the image.
    pub pixels: u32,
    /// Draw the pulsing skeleton over the image.
    pub show_skeleton: bool,
    /// The image element stays mounted while loading but is drawn transparent.
    pub image_visible: bool,
    /// Defer loading until the element is near the viewport.
    pub lazy: bool,
}

/// Load state for one avatar.
#[derive(Debug, Clone)]
pub struct AvatarView {
    resolver: ImageResolver,
    source: Option<String>,
    alt: Option<String>,
    size: AvatarSize,
    loading: bool,
    errored: bool,
    element_src: String,
}

impl AvatarView {
    /// Create a view for `source`.
    pub fn new(resolver: ImageResolver, source: Option<String>, size: AvatarSize) -> Self {
        let element_src = resolver.resolve(source.as_deref());
        Self {
            resolver,
            source,
            alt: None,
            size,
            loading: true,
            errored: false,
            element_src,
        }
    }

    /// Set the alt text.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Current image reference.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Display size.
    pub fn size(&self) -> AvatarSize {
        self.size
    }

    /// Whether the skeleton is showing.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the current reference already failed to load.
    pub fn has_error(&self) -> bool {
        self.errored
    }

    /// Point the view at a new reference.
    ///
    /// A different reference clears the error and restarts loading. Passing the
    /// current reference again leaves the state untouched, so a failed image stays
    /// on the placeholder.
    pub fn set_source(&mut self, source: Option<String>) {
        if source == self.source {
            return;
        }
        self.source = source;
        self.loading = true;
        self.errored = false;
        self.element_src = self.resolved_src();
    }

    /// Resolve the current reference, honouring the error flag.
    pub fn resolved_src(&self) -> String {
        self.resolver
            .resolve_with_error(self.source.as_deref(), self.errored)
    }

    /// The image element finished loading.
    ///
    /// A load of the placeholder shown after a failure keeps the error, so the
    /// failed reference is not requested again.
    pub fn on_load_success(&mut self) {
        self.loading = false;
        if self.element_src != DEFAULT_PROFILE_IMAGE {
            self.errored = false;
        }
    }

    /// The image element failed to load.
    pub fn on_load_failure(&mut self) {
        log::warn!(
            "Image failed to load: {}",
            self.source.as_deref().unwrap_or("<none>")
        );
        self.errored = true;
        self.loading = false;
        self.element_src = DEFAULT_PROFILE_IMAGE.to_owned();
    }

    /// Snapshot for rendering.
    pub fn frame(&self) -> AvatarFrame {
        AvatarFrame {
            src: self.element_src.clone(),
            alt: self
                .alt
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| DEFAULT_ALT.to_owned()),
            pixels: self.size.pixels(),
            show_skeleton: self.loading,
            image_visible: !self.loading,
            lazy: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn view(source: Option<&str>) -> AvatarView {
        AvatarView::new(
            ImageResolver::new("https://api.example"),
            source.map(str::to_owned),
            AvatarSize::Md,
        )
    }

    #[test]
    fn test_initial_frame_is_loading() {
        let avatar = view(Some("/u/1.png"));
        let frame = avatar.frame();

        assert_eq!(frame.src, "https://api.example/u/1.png");
        assert_eq!(frame.alt, DEFAULT_ALT);
        assert_eq!(frame.pixels, 40);
        assert!(frame.show_skeleton);
        assert!(!frame.image_visible);
        assert!(frame.lazy);
    }

    #[test]
    fn test_load_success_reveals_image() {
        let mut avatar = view(Some("u/1.png")).with_alt("Alice");
        avatar.on_load_success();

        let frame = avatar.frame();
        assert_eq!(frame.alt, "Alice");
        assert!(!frame.show_skeleton);
        assert!(frame.image_visible);
        assert!(!avatar.has_error());
    }

    #[test]
    fn test_failure_forces_placeholder() {
        let mut avatar = view(Some("/u/broken.png"));
        avatar.on_load_failure();

        assert!(avatar.has_error());
        assert!(!avatar.is_loading());
        assert_eq!(avatar.frame().src, DEFAULT_PROFILE_IMAGE);
        assert_eq!(avatar.resolved_src(), DEFAULT_PROFILE_IMAGE);
    }

    #[test]
    fn test_error_is_sticky_for_same_reference() {
        let mut avatar = view(Some("/u/broken.png"));
        avatar.on_load_failure();

        avatar.set_source(Some("/u/broken.png".into()));
        assert!(avatar.has_error());
        assert_eq!(avatar.resolved_src(), DEFAULT_PROFILE_IMAGE);
        assert_eq!(avatar.frame().src, DEFAULT_PROFILE_IMAGE);
    }

    #[test]
    fn test_placeholder_load_keeps_error() {
        let mut avatar = view(Some("/u/broken.png"));
        avatar.on_load_failure();
        avatar.on_load_success();

        assert!(avatar.has_error());
        assert!(!avatar.is_loading());

        avatar.set_source(Some("/u/broken.png".into()));
        assert!(avatar.has_error());
        assert_eq!(avatar.resolved_src(), DEFAULT_PROFILE_IMAGE);
        assert_eq!(avatar.frame().src, DEFAULT_PROFILE_IMAGE);
    }

    #[test]
    fn test_new_reference_retries() {
        let mut avatar = view(Some("/u/broken.png"));
        avatar.on_load_failure();

        avatar.set_source(Some("/u/2.png".into()));
        assert!(!avatar.has_error());
        assert!(avatar.is_loading());
        assert_eq!(avatar.frame().src, "https://api.example/u/2.png");
    }

    #[test]
    fn test_missing_source_uses_placeholder() {
        let avatar = view(None);
        assert_eq!(avatar.frame().src, DEFAULT_PROFILE_IMAGE);
    }
}
