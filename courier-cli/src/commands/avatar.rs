//! Avatar command.

use anyhow::Result;
use clap::Args;

use crate::config::{build_client, Overrides};
use crate::handlers::avatar as handlers;
use crate::output::{print_item, OutputFormat};

#[derive(Args)]
pub struct AvatarArgs {
    /// Image reference: absolute URL, /root-relative or bare relative path
    pub reference: Option<String>,

    /// Size name (sm, md, lg, xl, 2xl, 3xl); unknown names use md
    #[arg(short, long, default_value = "md")]
    pub size: String,
}

pub fn handle(args: AvatarArgs, format: OutputFormat, overrides: &Overrides) -> Result<()> {
    let client = build_client(overrides)?;
    let info = handlers::resolve_avatar(client.image_resolver(), args.reference, &args.size);
    print_item(&info, format);
    Ok(())
}
