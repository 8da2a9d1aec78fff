//! Post handlers.

use anyhow::Result;
use colored::Colorize;
use courier::{CourierClient, PostId, Route};
use rust_i18n::t;
use serde::Serialize;

use crate::output::PlainPrint;

/// Post route and shareable link.
#[derive(Debug, Clone, Serialize)]
pub struct PostLinkInfo {
    pub id: String,
    pub route: String,
    pub link: String,
}

impl PlainPrint for PostLinkInfo {
    fn plain_print(&self) {
        println!("{}", t!("post_route", route = self.route.cyan()));
        println!("{}", t!("post_link", link = self.link.green()));
    }
}

/// Build the route and link for a post id.
pub fn post_link(client: &CourierClient, id: &str) -> Result<PostLinkInfo> {
    let route = Route::Post(PostId::from(id));
    let link = route.link(&client.config().app_origin)?;

    Ok(PostLinkInfo {
        id: id.to_string(),
        route: route.path(),
        link: link.to_string(),
    })
}
