//! Client-side routes and the navigator seam.

use url::Url;

use crate::error::{Error, Result};
use crate::models::PostId;

/// A front-end route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Post detail page, `/post/{id}`.
    Post(PostId),
}

impl Route {
    /// Path component of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Post(id) => format!("/post/{}", id),
        }
    }

    /// Absolute link to the route under `origin`.
    ///
    /// The origin's own path, query and fragment are dropped. The id is encoded as a
    /// single path segment.
    pub fn link(&self, origin: &str) -> Result<Url> {
        let mut link = Url::parse(origin)?;
        link.set_query(None);
        link.set_fragment(None);

        {
            let mut segments = link
                .path_segments_mut()
                .map_err(|_| Error::invalid(format!("not a base origin: {}", origin)))?;
            segments.clear();
            match self {
                Route::Post(id) => {
                    segments.push("post").push(id.as_str());
                }
            }
        }

        Ok(link)
    }
}

/// Something that can move the user to a route.
pub trait Navigator: Send + Sync {
    /// Move to `route`.
    fn navigate(&self, route: &Route);
}

/// Navigator that only logs. Used when the embedder supplies none.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &Route) {
        log::info!("navigate to {}", route.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_route() {
        let route = Route::Post("p1".into());
        assert_eq!(route.path(), "/post/p1");
    }

    #[test]
    fn test_post_link() {
        let route = Route::Post("p1".into());
        let link = route.link("https://app.example").unwrap();
        assert_eq!(link.as_str(), "https://app.example/post/p1");
    }

    #[test]
    fn test_post_link_ignores_origin_path() {
        let route = Route::Post("p1".into());
        let link = route.link("https://app.example/feed/").unwrap();
        assert_eq!(link.as_str(), "https://app.example/post/p1");
    }

    #[test]
    fn test_post_link_encodes_id_as_one_segment() {
        let link = Route::Post("../admin".into())
            .link("https://app.example")
            .unwrap();
        assert_eq!(link.as_str(), "https://app.example/post/..%2Fadmin");

        let link = Route::Post("a?b#c".into())
            .link("https://app.example/?tab=feed#top")
            .unwrap();
        assert_eq!(link.as_str(), "https://app.example/post/a%3Fb%23c");
        assert_eq!(link.path_segments().map(|s| s.count()), Some(2));
    }

    #[test]
    fn test_invalid_origin() {
        let route = Route::Post("p1".into());
        assert!(route.link("not a url").is_err());
        assert!(route.link("mailto:someone@example.com").is_err());
    }
}
