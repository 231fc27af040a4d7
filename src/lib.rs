// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! OAuth2 grants: client-side `password` and `authorization_code` flows
//!
//! This crate exchanges user credentials or authorization codes for access
//! tokens, fetches the authenticated user's profile, and builds the
//! authorize URL that starts the code flow, all against a single
//! authorization server.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::{ClientConfig, ClientId, ClientSecret, Config};
pub use error::{OAuth2Error, TransportError};
pub use models::{AccessToken, Attributes, User};
pub use services::{HttpTransport, OAuth2Client, ReqwestTransport, RequestOptions, TransportConfig};
