// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - OAuth2 client and its HTTP transport.

pub mod oauth2;
pub mod transport;

pub use oauth2::{AccessTokenFactory, OAuth2Client, UserFactory};
pub use transport::{
    HttpTransport, ReqwestTransport, RequestOptions, TransportConfig, TransportResponse,
};
