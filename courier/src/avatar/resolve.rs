//! Image reference resolution.

/// Image shown when a reference is missing or failed to load.
pub const DEFAULT_PROFILE_IMAGE: &str =
    "https://tse2.mm.bing.net/th?id=OIP.T60Aago6tLDepIF5alRigwHaHa&pid=Api&P=0&h=180";

/// Completes partial image references against the backend origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base_origin: String,
}

impl ImageResolver {
    /// Create a resolver. Trailing slashes on `base_origin` are ignored.
    pub fn new(base_origin: impl Into<String>) -> Self {
        let base_origin = base_origin.into();
        Self {
            base_origin: base_origin.trim_end_matches('/').to_owned(),
        }
    }

    /// The origin relative references are joined to.
    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    /// Resolve a reference to a full URL.
    pub fn resolve(&self, reference: Option<&str>) -> String {
        self.resolve_with_error(reference, false)
    }

    /// Resolve a reference, returning the placeholder once it is known to fail.
    pub fn resolve_with_error(&self, reference: Option<&str>, errored: bool) -> String {
        let reference = match reference {
            Some(r) if !r.is_empty() && !errored => r,
            _ => return DEFAULT_PROFILE_IMAGE.to_owned(),
        };

        if reference.starts_with("http") {
            reference.to_owned()
        } else if reference.starts_with('/') {
            format!("{}{}", self.base_origin, reference)
        } else {
            format!("{}/{}", self.base_origin, reference)
        }
    }
}
