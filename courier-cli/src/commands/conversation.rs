//! Conversations command.

use anyhow::Result;
use clap::Args;
use rust_i18n::t;

use crate::config::{build_authed_client, Overrides};
use crate::handlers::{self, conversation};
use crate::output::{print_table, OutputFormat};

#[derive(Args)]
pub struct ConversationsArgs {
    /// Only show conversations whose other participant's name contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

pub async fn handle(
    args: ConversationsArgs,
    format: OutputFormat,
    overrides: &Overrides,
) -> Result<()> {
    let client = build_authed_client(overrides)?;
    let mut picker = handlers::open_picker(&client)?;
    let result = conversation::list_conversations(&mut picker, args.search.as_deref()).await;

    if matches!(format, OutputFormat::Plain) {
        let count = result.conversations.len();
        match result.query.as_deref().filter(|q| !q.trim().is_empty()) {
            Some(query) => println!(
                "{}\n",
                t!("conversations_matching", count = count, query = query)
            ),
            None if count == 0 => println!("{}\n", t!("no_conversations")),
            None => println!("{}\n", t!("conversations_found", count = count)),
        }
    }

    print_table(result.conversations, format);
    Ok(())
}
