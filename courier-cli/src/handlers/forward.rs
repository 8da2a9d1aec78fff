//! Forward handlers.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use courier::{
    ConversationId, CourierClient, ForwardOutcome, ForwardPayload, ForwardPicker, Post,
    PostPreview,
};
use rust_i18n::t;
use serde::Serialize;

use crate::output::{format_time, PlainPrint};

/// How the target conversation is chosen.
#[derive(Debug, Clone)]
pub enum Target {
    /// Exact conversation id.
    Id(String),
    /// First conversation whose other participant matches the search text.
    Search(String),
}

/// Preview of the post about to be forwarded.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewInfo {
    pub author: String,
    pub content: String,
    pub images: Option<String>,
    pub posted: String,
}

impl PreviewInfo {
    pub fn new(preview: PostPreview, post: &Post) -> Self {
        Self {
            author: preview.author,
            content: preview.content,
            images: preview.image_badge,
            posted: format_time(post.created_time()),
        }
    }
}

impl PlainPrint for PreviewInfo {
    fn plain_print(&self) {
        println!("{}", t!("forwarding").bold());
        println!("   {}", self.author.green());
        for line in self.content.lines().take(3) {
            println!("   {}", line);
        }
        if let Some(images) = &self.images {
            println!("   {}", images.cyan());
        }
        println!("   {}", t!("posted_at", time = &self.posted).dimmed());
    }
}

/// Forward result.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardResult {
    pub conversation_id: String,
    pub recipient: String,
    pub post_id: String,
    pub post_link: String,
    pub sent: bool,
    pub payload: Option<ForwardPayload>,
}

impl PlainPrint for ForwardResult {
    fn plain_print(&self) {
        match &self.payload {
            Some(payload) if !self.sent => {
                println!("{}", t!("dry_run_payload").yellow());
                println!(
                    "{}",
                    serde_json::to_string_pretty(payload).unwrap_or_default()
                );
            }
            _ => {
                println!("{}", t!("forwarded_to", name = self.recipient.green()));
                println!("{}", t!("view_original", link = &self.post_link).dimmed());
            }
        }
    }
}

/// Read a post from a JSON file.
pub fn load_post(path: &Path) -> Result<Post> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read post file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse post file {}", path.display()))
}

/// Open a picker for `post` and select the requested conversation.
pub async fn prepare(client: &CourierClient, post: Post, target: &Target) -> Result<ForwardPicker> {
    let mut picker = super::open_picker(client)?;

    picker.open(post).await;

    let id = match target {
        Target::Id(id) => ConversationId::from(id),
        Target::Search(query) => {
            picker.set_search_query(query.as_str());
            picker
                .rows()
                .first()
                .map(|row| row.conversation_id.clone())
                .ok_or_else(|| anyhow!("{}", t!("no_match", query = query)))?
        }
    };

    picker.select_conversation(&id)?;
    Ok(picker)
}

/// Forward the picker's post into its selected conversation.
pub async fn forward(picker: &mut ForwardPicker, dry_run: bool) -> Result<ForwardResult> {
    let recipient = picker
        .rows()
        .into_iter()
        .find(|row| row.selected)
        .map(|row| row.name)
        .unwrap_or_default();

    let ticket = picker
        .begin_forward()?
        .ok_or_else(|| anyhow!("{}", t!("forward_skipped")))?;
    let payload = ticket.payload().clone();

    if dry_run {
        picker.close();
        return Ok(result(payload, recipient, false));
    }

    let outcome = ticket.submit().await;

    match picker.finish_forward(ticket, outcome) {
        ForwardOutcome::Sent(_) => Ok(result(payload, recipient, true)),
        ForwardOutcome::Failed(e) => Err(with_hint(e)),
        ForwardOutcome::Skipped => bail!("{}", t!("forward_skipped")),
        ForwardOutcome::Stale => bail!("{}", t!("forward_stale")),
    }
}

/// Attach what the user can do about a failed forward.
fn with_hint(error: courier::Error) -> anyhow::Error {
    let hint = if error.is_auth_error() {
        Some(t!("hint_login"))
    } else if error.is_retryable() {
        Some(t!("hint_retry"))
    } else {
        None
    };

    match hint {
        Some(hint) => anyhow::Error::new(error).context(hint.to_string()),
        None => error.into(),
    }
}

fn result(payload: ForwardPayload, recipient: String, sent: bool) -> ForwardResult {
    ForwardResult {
        conversation_id: payload.conversation_id.to_string(),
        recipient,
        post_id: payload.forwarded_post.post_id.to_string(),
        post_link: payload.forwarded_post.post_link.clone(),
        sent,
        payload: if sent { None } else { Some(payload) },
    }
}
