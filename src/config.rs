// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration.
//!
//! [`ClientConfig`] is what the OAuth2 client holds for its lifetime.
//! [`Config`] adds transport settings and knows how to load itself from
//! environment variables for the command line front end; the library core
//! never reads the environment on its own.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::services::transport::TransportConfig;

const DEFAULT_USER_ENDPOINT: &str = "api/user";
const DEFAULT_TOKEN_ENDPOINT: &str = "oauth/token";
const DEFAULT_AUTHORIZE_ENDPOINT: &str = "oauth/authorize";

/// OAuth2 client identifier. Servers issue either strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ClientId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// OAuth2 client secret. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw secret, for placing in a request body.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(<redacted>)")
    }
}

impl fmt::Display for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl From<&str> for ClientSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for ClientSecret {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

/// Credentials and endpoints of the authorization server.
///
/// Endpoints are relative paths joined onto `server_url`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    /// Base URL without a trailing slash
    pub server_url: String,
    pub user_endpoint: String,
    pub token_endpoint: String,
    pub authorize_endpoint: String,
}

impl ClientConfig {
    /// Create a configuration using the default endpoint paths.
    pub fn new(
        client_id: impl Into<ClientId>,
        client_secret: impl Into<ClientSecret>,
        server_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            server_url: normalize_server_url(server_url.into()),
            user_endpoint: DEFAULT_USER_ENDPOINT.to_string(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
            authorize_endpoint: DEFAULT_AUTHORIZE_ENDPOINT.to_string(),
        }
    }

    pub fn with_user_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.user_endpoint = endpoint.into();
        self
    }

    pub fn with_token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = endpoint.into();
        self
    }

    pub fn with_authorize_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.authorize_endpoint = endpoint.into();
        self
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    /// Per-request timeout for the default transport
    pub http_timeout: Option<Duration>,
}

impl Config {
    /// Fixed values for tests.
    pub fn test_default() -> Self {
        Self {
            client: ClientConfig::new("test_client_id", "test_secret", "http://localhost:8000"),
            http_timeout: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let client_id =
            env::var("OAUTH2_CLIENT_ID").map_err(|_| ConfigError::Missing("OAUTH2_CLIENT_ID"))?;
        let client_secret = env::var("OAUTH2_CLIENT_SECRET")
            .map(|v| v.trim().to_string())
            .map_err(|_| ConfigError::Missing("OAUTH2_CLIENT_SECRET"))?;
        let server_url =
            env::var("OAUTH2_SERVER_URL").map_err(|_| ConfigError::Missing("OAUTH2_SERVER_URL"))?;

        let client = ClientConfig::new(client_id.trim(), client_secret, server_url.trim())
            .with_user_endpoint(
                env::var("OAUTH2_USER_ENDPOINT").unwrap_or_else(|_| DEFAULT_USER_ENDPOINT.into()),
            )
            .with_token_endpoint(
                env::var("OAUTH2_TOKEN_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_TOKEN_ENDPOINT.into()),
            )
            .with_authorize_endpoint(
                env::var("OAUTH2_AUTHORIZE_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_AUTHORIZE_ENDPOINT.into()),
            );

        let http_timeout = match env::var("OAUTH2_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "OAUTH2_HTTP_TIMEOUT_SECS",
                    reason: format!("expected whole seconds, got {:?}", raw),
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            client,
            http_timeout,
        })
    }

    /// Settings for the default `reqwest` transport.
    pub fn transport_config(&self) -> TransportConfig {
        let transport = TransportConfig::new(&self.client.server_url);
        match self.http_timeout {
            Some(timeout) => transport.with_timeout(timeout),
            None => transport,
        }
    }
}

fn normalize_server_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("OAUTH2_CLIENT_ID", "42");
        env::set_var("OAUTH2_CLIENT_SECRET", " test_secret \n");
        env::set_var("OAUTH2_SERVER_URL", "https://auth.example/");
        env::set_var("OAUTH2_TOKEN_ENDPOINT", "token");
        env::remove_var("OAUTH2_HTTP_TIMEOUT_SECS");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.client.client_id.as_str(), "42");
        assert_eq!(config.client.client_secret.expose(), "test_secret");
        assert_eq!(config.client.server_url, "https://auth.example");
        assert_eq!(config.client.token_endpoint, "token");
        assert_eq!(config.client.authorize_endpoint, "oauth/authorize");
        assert!(config.http_timeout.is_none());
    }

    #[test]
    fn test_numeric_client_id() {
        let config = ClientConfig::new(7_u64, "s", "https://auth.example");
        assert_eq!(config.client_id.to_string(), "7");
    }

    #[test]
    fn test_secret_is_redacted() {
        let config = ClientConfig::new("abc", "super-secret-value", "https://auth.example");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("<redacted>"));
        assert_eq!(config.client_secret.to_string(), "<redacted>");
    }
}
