//! Message API.

use std::sync::Arc;

use crate::{client::CourierClientInner, error::Result, models::ForwardPayload};

/// Endpoint creating a message in a conversation.
pub const MESSAGES_ENDPOINT: &str = "api/messages";

/// API for message creation.
pub struct MessageApi {
    client: Arc<CourierClientInner>,
}

impl MessageApi {
    pub(crate) fn new(client: Arc<CourierClientInner>) -> Self {
        Self { client }
    }

    /// Send an assembled forward payload. Any 2xx answer counts as delivered.
    pub async fn send(&self, payload: &ForwardPayload) -> Result<()> {
        self.client.post_authed(MESSAGES_ENDPOINT, payload).await?;
        Ok(())
    }
}
