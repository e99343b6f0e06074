use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of managed browser policy (e.g. `"firefox"`, `"chromium"`).
///
/// The vocabulary is owned by whoever provisions the room, so any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrowserPolicyType(pub String);

impl BrowserPolicyType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BrowserPolicyType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BrowserPolicyType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for BrowserPolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Managed browser policy attached to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserPolicy {
    /// Policy flavour.
    #[serde(rename = "type")]
    pub kind: BrowserPolicyType,
    /// Location of the policy file inside the room container.
    pub path: String,
}

impl BrowserPolicy {
    pub fn new(kind: impl Into<BrowserPolicyType>, path: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            path: path.into(),
        }
    }
}
