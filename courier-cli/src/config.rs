//! Configuration management for the courier CLI.

use anyhow::{Context, Result};
use courier::CourierClient;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Authentication credentials.
    pub auth: Option<AuthConfig>,
    /// Backend base URL.
    pub api_base: Option<String>,
    /// Front-end origin for shareable links.
    pub app_origin: Option<String>,
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Access token.
    pub token: String,
    /// User ID.
    pub uid: String,
}

/// Values from the command line or environment that win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_base: Option<String>,
    pub app_origin: Option<String>,
}

/// Get the configuration file path.
pub fn config_path() -> Result<PathBuf> {
    let exe_path = env::current_exe().context("Could not determine executable path")?;
    let exe_dir = exe_path
        .parent()
        .context("Could not determine executable directory")?;

    Ok(exe_dir.join("courier.toml"))
}

/// Load configuration from file.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path).context("Failed to read config file")?;

    toml::from_str(&content).context("Failed to parse config file")
}

/// Save configuration to file.
pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(&path, content).context("Failed to write config file")?;

    Ok(())
}

impl Config {
    /// Effective backend base URL.
    pub fn api_base<'a>(&'a self, overrides: &'a Overrides) -> &'a str {
        overrides
            .api_base
            .as_deref()
            .or(self.api_base.as_deref())
            .unwrap_or(courier::client::DEFAULT_BASE_URL)
    }

    /// Effective front-end origin.
    pub fn app_origin<'a>(&'a self, overrides: &'a Overrides) -> &'a str {
        overrides
            .app_origin
            .as_deref()
            .or(self.app_origin.as_deref())
            .unwrap_or(courier::client::DEFAULT_APP_ORIGIN)
    }
}

/// Build a client from the current configuration.
pub fn build_client(overrides: &Overrides) -> Result<CourierClient> {
    let config = load_config()?;

    let mut builder = CourierClient::builder()
        .base_url(config.api_base(overrides))
        .app_origin(config.app_origin(overrides));

    if let Some(auth) = &config.auth {
        builder = builder.auth(&auth.token, &auth.uid);
    }

    builder.build().context("Failed to build courier client")
}

/// Build a client that requires authentication.
pub fn build_authed_client(overrides: &Overrides) -> Result<CourierClient> {
    let config = load_config()?;

    let auth = config
        .auth
        .as_ref()
        .context("Authentication required. Run 'courier auth login' first.")?;

    CourierClient::builder()
        .auth(&auth.token, &auth.uid)
        .base_url(config.api_base(overrides))
        .app_origin(config.app_origin(overrides))
        .build()
        .context("Failed to build courier client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            api_base = "https://api.example"

            [auth]
            token = "secret"
            uid = "64f0c1"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.as_ref().map(|a| a.uid.as_str()), Some("64f0c1"));
        assert_eq!(config.api_base(&Overrides::default()), "https://api.example");
        assert_eq!(
            config.app_origin(&Overrides::default()),
            courier::client::DEFAULT_APP_ORIGIN
        );
    }

    #[test]
    fn test_overrides_win() {
        let config = Config {
            api_base: Some("https://file.example".into()),
            ..Default::default()
        };
        let overrides = Overrides {
            api_base: Some("https://env.example".into()),
            app_origin: Some("https://app.example".into()),
        };

        assert_eq!(config.api_base(&overrides), "https://env.example");
        assert_eq!(config.app_origin(&overrides), "https://app.example");
    }
}
