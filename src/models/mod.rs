// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Records decoded from authorization server responses.

pub mod access_token;
pub mod user;

pub use access_token::AccessToken;
pub use user::User;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{OAuth2Error, Result};

/// Decoded JSON object from a response body.
pub type Attributes = serde_json::Map<String, Value>;

/// Decode a response body into a JSON object.
///
/// Anything other than a top-level object is a malformed response.
pub fn decode_attributes(body: &[u8]) -> Result<Attributes> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(attributes) => Ok(attributes),
        other => Err(OAuth2Error::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Text of a JSON string; other types read as absent.
pub(crate) fn text_value(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// Identifier sent as either a string or a number.
pub(crate) fn id_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Non-negative integer sent as a number or a numeric string.
pub(crate) fn u64_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// String field that reads as empty unless the server sent a string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_value(&Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn lenient_opt_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_value(&Value::deserialize(deserializer)?))
}

pub(crate) fn lenient_opt_u64<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u64_value(&Value::deserialize(deserializer)?))
}
