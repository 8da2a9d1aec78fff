//! HTTP client and configuration.

mod auth;
mod http;

pub use auth::AuthInfo;
pub use http::{HttpConfig, DEFAULT_APP_ORIGIN, DEFAULT_BASE_URL};

use crate::api::{ConversationApi, MessageApi, MessagingBackend};
use crate::avatar::ImageResolver;
use crate::error::{Error, Result};
use crate::models::{Conversation, ForwardPayload};
use crate::picker::{ForwardPicker, PickerContext};
use async_trait::async_trait;
use http::{build_client, HttpExecutor};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating CourierClient.
pub struct CourierClientBuilder {
    auth: Option<AuthInfo>,
    http_config: HttpConfig,
}

impl std::fmt::Debug for CourierClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourierClientBuilder")
            .field("auth", &self.auth.as_ref().map(|a| &a.uid))
            .field("http_config", &self.http_config)
            .finish()
    }
}

impl Default for CourierClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CourierClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            auth: None,
            http_config: HttpConfig::default(),
        }
    }

    /// Set authentication.
    pub fn auth(mut self, token: impl Into<String>, uid: impl Into<String>) -> Self {
        self.auth = Some(AuthInfo::new(token, uid));
        self
    }

    /// Set authentication from AuthInfo.
    pub fn with_auth(mut self, auth: AuthInfo) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.http_config.base_url = url.into();
        self
    }

    /// Set the front-end origin used in shareable post links.
    pub fn app_origin(mut self, origin: impl Into<String>) -> Self {
        self.http_config.app_origin = origin.into();
        self
    }

    /// Set custom user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.http_config.custom_user_agent = Some(ua.into());
        self
    }

    /// Set connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = timeout;
        self
    }

    /// Set read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.read_timeout = timeout;
        self
    }

    /// Build CourierClient.
    pub fn build(self) -> Result<CourierClient> {
        let http_client = build_client(&self.http_config)?;

        Ok(CourierClient {
            inner: Arc::new(CourierClientInner {
                http: http_client,
                config: self.http_config,
                auth: self.auth,
            }),
        })
    }
}

/// Internal client state.
pub(crate) struct CourierClientInner {
    pub http: reqwest::Client,
    pub config: HttpConfig,
    pub auth: Option<AuthInfo>,
}

impl CourierClientInner {
    /// Get usable auth info or error. Blank credentials count as none.
    pub fn require_auth(&self) -> Result<&AuthInfo> {
        self.auth
            .as_ref()
            .filter(|auth| auth.is_valid())
            .ok_or(Error::AuthRequired)
    }

    /// Create HTTP executor.
    pub fn executor(&self) -> HttpExecutor<'_> {
        HttpExecutor::new(&self.http, &self.config)
    }

    /// Execute authenticated GET request.
    pub async fn get_authed<T: DeserializeOwned>(&self, api: &str) -> Result<T> {
        let auth = self.require_auth()?;
        self.executor().get_json(api, Some(auth.token.as_str())).await
    }

    /// Execute authenticated JSON POST request.
    pub async fn post_authed<B: Serialize + ?Sized>(&self, api: &str, body: &B) -> Result<String> {
        let auth = self.require_auth()?;
        self.executor().post_json(api, body, Some(auth.token.as_str())).await
    }
}

/// Client for the messaging backend.
#[derive(Clone)]
pub struct CourierClient {
    pub(crate) inner: Arc<CourierClientInner>,
}

impl CourierClient {
    /// Create a new client builder.
    pub fn builder() -> CourierClientBuilder {
        CourierClientBuilder::new()
    }

    /// Get the conversation API.
    pub fn conversations(&self) -> ConversationApi {
        ConversationApi::new(self.inner.clone())
    }

    /// Get the message API.
    pub fn messages(&self) -> MessageApi {
        MessageApi::new(self.inner.clone())
    }

    /// Check if the client holds usable credentials.
    pub fn is_authenticated(&self) -> bool {
        self.inner.require_auth().is_ok()
    }

    /// Get the current authentication info.
    pub fn auth_info(&self) -> Option<&AuthInfo> {
        self.inner.auth.as_ref()
    }

    /// Get the current user ID if authenticated.
    pub fn current_uid(&self) -> Option<&str> {
        self.inner.auth.as_ref().map(|a| a.uid.as_str())
    }

    /// HTTP configuration in use.
    pub fn config(&self) -> &HttpConfig {
        &self.inner.config
    }

    /// Image resolver rooted at the backend origin.
    pub fn image_resolver(&self) -> ImageResolver {
        ImageResolver::new(self.inner.config.image_origin())
    }

    /// Context a forward picker needs: current user, link origin, image origin.
    pub fn picker_context(&self) -> Result<PickerContext> {
        let auth = self.inner.require_auth()?;
        Ok(PickerContext {
            current_user: auth.user_id(),
            app_origin: self.inner.config.app_origin.clone(),
            images: self.image_resolver(),
        })
    }

    /// Create a forward picker backed by this client.
    pub fn forward_picker(&self) -> Result<ForwardPicker> {
        let context = self.picker_context()?;
        Ok(ForwardPicker::new(Arc::new(self.clone()), context))
    }
}

#[async_trait]
impl MessagingBackend for CourierClient {
    async fn list_conversations(&self) -> Result<Vec<Conversation>> {
        self.conversations().list().await
    }

    async fn create_message(&self, payload: &ForwardPayload) -> Result<()> {
        self.messages().send(payload).await
    }
}

impl std::fmt::Debug for CourierClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourierClient")
            .field("authenticated", &self.is_authenticated())
            .field("base_url", &self.inner.config.base_url)
            .finish()
    }
}
