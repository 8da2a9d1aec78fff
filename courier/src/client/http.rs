//! HTTP client configuration and request execution.

use crate::error::{Error, Result};
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use url::Url;

/// Default backend base URL. Also the origin relative image paths hang off.
pub const DEFAULT_BASE_URL: &str = "https://updatedbackendcc.onrender.com/";

/// Default origin of the web front end, used for shareable post links.
pub const DEFAULT_APP_ORIGIN: &str = "http://localhost:5173";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("courier/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL for API requests.
    pub base_url: String,
    /// Origin of the front end that serves `/post/{id}`.
    pub app_origin: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Read timeout.
    pub read_timeout: Duration,
    /// Custom user agent.
    pub custom_user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            app_origin: DEFAULT_APP_ORIGIN.to_owned(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(20),
            custom_user_agent: None,
        }
    }
}

impl HttpConfig {
    /// The user agent to send.
    pub fn user_agent(&self) -> &str {
        self.custom_user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Base origin for completing relative image references, without a trailing slash.
    pub fn image_origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Resolve a relative API path to a full URL.
    pub fn resolve_url(&self, api: &str) -> Result<Url> {
        if api.starts_with("http://") || api.starts_with("https://") {
            return Url::parse(api).map_err(Error::Url);
        }

        let base = format!("{}/", self.base_url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|b| b.join(api.trim_start_matches('/')))
            .map_err(Error::Url)
    }
}

/// Build a reqwest client with the given configuration.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .read_timeout(config.read_timeout)
        .user_agent(config.user_agent())
        .gzip(true)
        .build()
        .map_err(Error::Network)
}

/// HTTP request executor.
pub struct HttpExecutor<'a> {
    client: &'a Client,
    config: &'a HttpConfig,
}

impl<'a> HttpExecutor<'a> {
    /// Create a new executor.
    pub fn new(client: &'a Client, config: &'a HttpConfig) -> Self {
        Self { client, config }
    }

    /// Build a request with the authorization header attached.
    fn build_request(&self, method: Method, url: Url, token: Option<&str>) -> RequestBuilder {
        let request = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");

        match token {
            Some(token) => request.header(header::AUTHORIZATION, token),
            None => request,
        }
    }

    /// Execute a GET request and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, api: &str, token: Option<&str>) -> Result<T> {
        let url = self.config.resolve_url(api)?;
        log::debug!("GET {}", url);

        let response = self
            .build_request(Method::GET, url, token)
            .send()
            .await
            .map_err(Error::Network)?;

        let text = self.handle_response(response).await?;
        serde_json::from_str(&text).map_err(Error::Json)
    }

    /// Execute a POST request with a JSON body and return the response text.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        api: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<String> {
        let url = self.config.resolve_url(api)?;
        log::debug!("POST {}", url);

        let response = self
            .build_request(Method::POST, url, token)
            .json(body)
            .send()
            .await
            .map_err(Error::Network)?;

        self.handle_response(response).await
    }

    /// Read the body, turning any non-2xx status into an API error.
    async fn handle_response(&self, response: Response) -> Result<String> {
        let status = response.status();
        let text = response.text().await.map_err(Error::Network)?;

        if !status.is_success() {
            let message = extract_error_message(&text)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_owned());
            return Err(Error::api(status.as_u16(), message));
        }

        Ok(text)
    }
}

/// Pull a `message` field out of an error body, if the backend sent one.
fn extract_error_message(text: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
