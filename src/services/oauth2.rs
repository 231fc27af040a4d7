// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth2 client for the `password` and `authorization_code` grants.
//!
//! Handles:
//! - Resource owner password exchange
//! - Authorization code exchange
//! - Authenticated user lookup
//! - Authorize URL construction for the code flow

use std::fmt;
use std::sync::Arc;

use url::form_urlencoded;

use crate::config::{ClientConfig, Config};
use crate::error::{OAuth2Error, Result, TransportError};
use crate::models::{decode_attributes, AccessToken, Attributes, User};
use crate::services::transport::{
    HttpTransport, ReqwestTransport, RequestOptions, TransportResponse,
};

/// Builds a [`User`] from a decoded user endpoint response.
pub type UserFactory = Arc<dyn Fn(Attributes) -> Result<User> + Send + Sync>;

/// Builds an [`AccessToken`] from a decoded token endpoint response.
pub type AccessTokenFactory = Arc<dyn Fn(Attributes) -> Result<AccessToken> + Send + Sync>;

/// OAuth2 client bound to a single authorization server.
///
/// Configuration is fixed at construction. Each operation makes at most
/// one request and keeps no state between calls.
pub struct OAuth2Client<T> {
    transport: T,
    config: ClientConfig,
    make_user: UserFactory,
    make_access_token: AccessTokenFactory,
}

impl OAuth2Client<ReqwestTransport> {
    /// Create a client using the default `reqwest` transport.
    pub fn from_config(config: &Config) -> std::result::Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config.transport_config())?;
        Ok(Self::new(config.client.clone(), transport))
    }
}

impl<T: HttpTransport> OAuth2Client<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            config,
            make_user: Arc::new(User::from_attributes),
            make_access_token: Arc::new(AccessToken::from_attributes),
        }
    }

    /// Replace how user records are built from the user endpoint response.
    pub fn with_user_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(Attributes) -> Result<User> + Send + Sync + 'static,
    {
        self.make_user = Arc::new(factory);
        self
    }

    /// Replace how access tokens are built from the token endpoint response.
    pub fn with_access_token_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(Attributes) -> Result<AccessToken> + Send + Sync + 'static,
    {
        self.make_access_token = Arc::new(factory);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the user the token was issued to.
    ///
    /// GET {user_endpoint}
    /// Authorization: {token_type} {access_token}
    pub async fn fetch_user(&self, token: &AccessToken) -> Result<User> {
        if token.access_token.is_empty() || token.token_type.is_empty() {
            tracing::warn!("Fetching user with an incomplete access token");
        }

        let options = RequestOptions::new().header("Authorization", token.authorization_header());

        tracing::debug!(endpoint = %self.config.user_endpoint, "Fetching authenticated user");
        let response = self
            .transport
            .get(&self.config.user_endpoint, options)
            .await?;

        let attributes = check_response_json(&self.config.user_endpoint, response)?;
        (self.make_user)(attributes)
    }

    /// Exchange a resource owner's credentials for an access token.
    pub async fn exchange_password_for_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AccessToken> {
        let form = self
            .grant("password")
            .form_param("username", username)
            .form_param("password", password);

        self.request_token("password", form).await
    }

    /// Exchange an authorization code (from the redirect callback) for an
    /// access token.
    pub async fn exchange_authorization_code_for_token(
        &self,
        redirect_uri: &str,
        code: &str,
    ) -> Result<AccessToken> {
        let form = self
            .grant("authorization_code")
            .form_param("redirect_uri", redirect_uri)
            .form_param("code", code);

        self.request_token("authorization_code", form).await
    }

    /// URL to send the user to in order to start the authorization code flow.
    ///
    /// Parameter order and the empty `scope` are fixed. The redirect URI is
    /// encoded but otherwise passed through as given.
    pub fn build_authorization_url(&self, redirect_uri: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", self.config.client_id.as_str())
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", "")
            .finish();

        format!(
            "{}/{}?{}",
            self.config.server_url, self.config.authorize_endpoint, query
        )
    }

    /// Form parameters shared by every token grant.
    fn grant(&self, grant_type: &str) -> RequestOptions {
        RequestOptions::new()
            .form_param("grant_type", grant_type)
            .form_param("client_id", self.config.client_id.as_str())
            .form_param("client_secret", self.config.client_secret.expose())
    }

    async fn request_token(&self, grant_type: &str, form: RequestOptions) -> Result<AccessToken> {
        tracing::debug!(
            grant_type,
            endpoint = %self.config.token_endpoint,
            "Requesting access token"
        );

        let response = self
            .transport
            .post(&self.config.token_endpoint, form)
            .await?;

        let attributes = check_response_json(&self.config.token_endpoint, response)?;
        let token = (self.make_access_token)(attributes)?;

        tracing::info!(
            grant_type,
            token_type = %token.token_type,
            expires_in = ?token.expires_in,
            "Access token issued"
        );
        Ok(token)
    }
}

impl<T: Clone> Clone for OAuth2Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: self.config.clone(),
            make_user: Arc::clone(&self.make_user),
            make_access_token: Arc::clone(&self.make_access_token),
        }
    }
}

impl<T> fmt::Debug for OAuth2Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth2Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Check response status and decode the body into a JSON object.
fn check_response_json(endpoint: &str, response: TransportResponse) -> Result<Attributes> {
    if !response.is_success() {
        let status = response.status;
        let body = response.text();
        tracing::warn!(status, endpoint, "Authorization server returned an error");
        return Err(OAuth2Error::Transport(TransportError::Status { status, body }));
    }

    decode_attributes(&response.body)
}
