//! Shared handlers for the CLI commands.

pub mod avatar;
pub mod conversation;
pub mod forward;
pub mod post;

use std::sync::Arc;

use anyhow::Result;
use courier::{CourierClient, ForwardPicker};

use crate::output::StderrAlerter;

/// A forward picker that reports alerts on stderr.
pub fn open_picker(client: &CourierClient) -> Result<ForwardPicker> {
    Ok(client
        .forward_picker()?
        .with_alerter(Arc::new(StderrAlerter)))
}
