//! Forward command.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use rust_i18n::t;

use crate::config::{build_authed_client, Overrides};
use crate::handlers::forward::{self as handlers, PreviewInfo, Target};
use crate::output::{print_item, OutputFormat};

#[derive(Args)]
pub struct ForwardArgs {
    /// JSON file holding the post to forward
    #[arg(short, long)]
    pub post: PathBuf,

    /// Target conversation ID
    #[arg(short, long, conflicts_with = "matching")]
    pub to: Option<String>,

    /// Pick the first conversation whose other participant's name contains this text
    #[arg(short = 'm', long = "match", value_name = "NAME")]
    pub matching: Option<String>,

    /// Build and print the payload without sending it
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn handle(args: ForwardArgs, format: OutputFormat, overrides: &Overrides) -> Result<()> {
    let target = match (args.to, args.matching) {
        (Some(id), _) => Target::Id(id),
        (None, Some(query)) => Target::Search(query),
        (None, None) => bail!("{}", t!("target_required")),
    };

    let post = handlers::load_post(&args.post)?;
    let client = build_authed_client(overrides)?;
    let mut picker = handlers::prepare(&client, post, &target).await?;

    if matches!(format, OutputFormat::Plain) {
        if let (Some(preview), Some(post)) = (picker.preview(), picker.post()) {
            print_item(&PreviewInfo::new(preview, post), format);
            println!();
        }
    }

    let result = handlers::forward(&mut picker, args.dry_run).await?;
    print_item(&result, format);
    Ok(())
}
