// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP transport used by the OAuth2 client.
//!
//! The client only needs relative GET and form POST requests; anything
//! transport-level (TLS, pooling, timeouts, redirects) belongs to the
//! implementation behind [`HttpTransport`].

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use std::time::Duration;
use url::Url;

use crate::error::TransportError;

/// Per-request headers and form parameters, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub form_params: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn form_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form_params.push((name.into(), value.into()));
        self
    }

    /// Look up a header value (names compare case-insensitively).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form_params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as returned by the server.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Capability to perform requests relative to the authorization server.
///
/// Implementations return every response the server sends, including
/// non-2xx ones; status interpretation is left to the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError>;

    async fn post(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError>;
}

/// Explicit settings for [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URI; request paths are joined onto it
    pub base_url: String,
    /// Headers sent with every request
    pub default_headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    /// Base URI of `server_url + "/"` with `Accept: application/json`.
    pub fn new(server_url: &str) -> Self {
        Self {
            base_url: format!("{}/", server_url.trim_end_matches('/')),
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }
}

/// [`HttpTransport`] backed by a `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let (name, value) = header_pair(name, value)?;
            headers.insert(name, value);
        }
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<TransportResponse, TransportError> {
        let response = request.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), TransportError> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| TransportError::Request(format!("invalid header name {:?}: {}", name, e)))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| TransportError::Request(format!("invalid value for header {}: {}", name, e)))?;
    Ok((name, value))
}

fn apply_headers(
    mut request: reqwest::RequestBuilder,
    headers: &[(String, String)],
) -> Result<reqwest::RequestBuilder, TransportError> {
    for (name, value) in headers {
        let (name, mut value) = header_pair(name, value)?;
        if name == reqwest::header::AUTHORIZATION {
            value.set_sensitive(true);
        }
        request = request.header(name, value);
    }
    Ok(request)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        let url = self.url(path)?;
        let request = apply_headers(self.http.get(url), &options.headers)?;
        self.send(request).await
    }

    async fn post(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        let url = self.url(path)?;
        let mut request = apply_headers(self.http.post(url), &options.headers)?;
        if !options.form_params.is_empty() {
            request = request.form(&options.form_params);
        }
        self.send(request).await
    }
}
