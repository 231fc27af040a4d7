//! Access token returned by the token endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_opt_string, lenient_opt_u64, lenient_string, Attributes};
use crate::error::Result;

/// Token endpoint response.
///
/// Missing, `null` or oddly typed fields read as empty rather than failing;
/// keys the record does not name are kept in `extra`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(default, deserialize_with = "lenient_string")]
    pub access_token: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub refresh_token: Option<String>,
    /// Usually "Bearer"
    #[serde(default, deserialize_with = "lenient_string")]
    pub token_type: String,
    /// Seconds until expiry. Some servers send it as a numeric string.
    #[serde(
        default,
        deserialize_with = "lenient_opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_in: Option<u64>,
    /// Space-delimited scopes, when the server reports them.
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl AccessToken {
    /// Build a token from a decoded response object.
    pub fn from_attributes(attributes: Attributes) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(attributes))?)
    }

    /// Value for the `Authorization` header: `"<token_type> <access_token>"`.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    pub fn is_bearer(&self) -> bool {
        self.token_type.eq_ignore_ascii_case("bearer")
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &str) -> &'static str {
            if value.is_empty() {
                ""
            } else {
                "<redacted>"
            }
        }

        f.debug_struct("AccessToken")
            .field("access_token", &redact(&self.access_token))
            .field(
                "refresh_token",
                &self.refresh_token.as_deref().map(redact),
            )
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("extra", &self.extra)
            .finish()
    }
}
