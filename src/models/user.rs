//! Authenticated user profile.

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{id_value, text_value, Attributes};
use crate::error::Result;

/// Keys lifted into named fields.
const KNOWN_KEYS: [&str; 3] = ["id", "name", "email"];

/// User profile from the user endpoint.
///
/// The server defines the schema. Common fields are exposed by name, the
/// rest live in `extra`, and the full attribute set stays available for
/// [`User::deserialize_into`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    /// User identifier; numeric ids are rendered as strings
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub extra: Attributes,
    attributes: Attributes,
}

impl User {
    /// Build a user from a decoded response object.
    ///
    /// Any JSON object is accepted. A named field of an unexpected type
    /// reads as `None` and stays reachable through [`User::get`].
    pub fn from_attributes(attributes: Attributes) -> Result<Self> {
        let extra = attributes
            .iter()
            .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            id: attributes.get("id").and_then(id_value),
            name: attributes.get("name").and_then(text_value),
            email: attributes.get("email").and_then(text_value),
            extra,
            attributes,
        })
    }

    /// Raw attribute by its wire name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// True when the server returned no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Re-read the profile into a stricter caller-defined shape.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.attributes.clone()))?)
    }
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}
