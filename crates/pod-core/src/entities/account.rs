use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A registered identity, including its plaintext secret.
///
/// Never leaves the identity registry; callers receive an [`AccountProfile`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    #[serde(rename = "username")]
    pub display_name: String,
    pub email: String,
    #[serde(rename = "password")]
    pub secret: String,
    pub role: Role,
}

impl Account {
    /// Strip the secret.
    #[must_use]
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// An account without its secret. This is what the session holds and what
/// gets persisted under the session key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccountProfile {
    pub id: String,
    #[serde(rename = "username")]
    pub display_name: String,
    pub email: String,
    pub role: Role,
}
