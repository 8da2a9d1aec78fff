//! Post commands.

use anyhow::Result;
use clap::Subcommand;

use crate::config::{build_client, Overrides};
use crate::handlers::post as handlers;
use crate::output::{print_item, OutputFormat};

#[derive(Subcommand)]
pub enum PostAction {
    /// Show the route and shareable link of a post
    Link {
        /// Post ID
        id: String,
    },
}

pub fn handle(action: PostAction, format: OutputFormat, overrides: &Overrides) -> Result<()> {
    match action {
        PostAction::Link { id } => {
            let client = build_client(overrides)?;
            let info = handlers::post_link(&client, &id)?;
            print_item(&info, format);
            Ok(())
        }
    }
}
