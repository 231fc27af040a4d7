// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use oauth2_grants::config::{ClientConfig, Config};
use oauth2_grants::error::TransportError;
use oauth2_grants::services::{HttpTransport, RequestOptions, TransportResponse};
use oauth2_grants::OAuth2Client;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub options: RequestOptions,
}

/// Offline transport that records requests and replays canned responses.
#[derive(Clone, Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<Result<TransportResponse, TransportError>>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::new(status, body.to_string())));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail(self, error: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            options,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no response queued".to_string())))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        self.record("GET", path, options)
    }

    async fn post(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        self.record("POST", path, options)
    }
}

/// Configuration with distinct endpoint paths so requests are easy to tell apart.
#[allow(dead_code)]
pub fn test_client_config() -> ClientConfig {
    ClientConfig::new("client-123", "secret-456", "https://auth.example")
        .with_user_endpoint("api/me")
        .with_token_endpoint("oauth/token")
        .with_authorize_endpoint("oauth/authorize")
}

/// Client over a mock transport; the returned handle shares its recordings.
#[allow(dead_code)]
pub fn create_test_client(transport: MockTransport) -> (OAuth2Client<MockTransport>, MockTransport) {
    let client = OAuth2Client::new(test_client_config(), transport.clone());
    (client, transport)
}

/// Client over the real reqwest transport pointed at `server_url`.
#[allow(dead_code)]
pub fn create_reqwest_client(server_url: &str) -> OAuth2Client<oauth2_grants::ReqwestTransport> {
    let mut config = Config::test_default();
    config.client = ClientConfig::new("client-123", "secret-456", server_url)
        .with_user_endpoint("api/me")
        .with_token_endpoint("oauth/token");
    OAuth2Client::from_config(&config).expect("Failed to build reqwest transport")
}

/// Turn a `[(key, value)]` list into owned pairs for comparisons.
#[allow(dead_code)]
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
