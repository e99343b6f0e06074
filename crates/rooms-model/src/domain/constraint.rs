use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::LabelError;

/// What to do with a room once a constraint fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintAction {
    #[default]
    Stop,
    Remove,
}

impl ConstraintAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintAction::Stop => "stop",
            ConstraintAction::Remove => "remove",
        }
    }
}

impl FromStr for ConstraintAction {
    type Err = LabelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stop" => Ok(Self::Stop),
            "remove" => Ok(Self::Remove),
            other => Err(LabelError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for ConstraintAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auto-expiry rule attached to a room.
///
/// Rules are only recorded here; nothing in this workspace enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Constraint {
    /// Fire once the room has existed for `seconds`.
    #[serde(rename_all = "camelCase")]
    TimeToLive {
        seconds: u64,
        #[serde(default)]
        action: ConstraintAction,
    },
    /// Fire once the room has had no participants for `threshold_seconds`.
    #[serde(rename_all = "camelCase")]
    EmptyRoom {
        threshold_seconds: u64,
        #[serde(default)]
        action: ConstraintAction,
    },
}
