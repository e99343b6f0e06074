use serde::{Deserialize, Serialize};

use crate::{BrowserPolicy, Constraint, EprPorts, PortConfig};

/// Decoded identity and networking configuration of a room.
///
/// This is the structured form of the label set written onto the room container at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLabels {
    /// Unique room name.
    pub name: String,
    /// Externally reachable base URL of the room.
    pub url: String,
    /// Image backing the room.
    pub neko_image: String,
    /// Single multiplexed port or a dedicated port range.
    pub ports: PortConfig,
    /// Managed browser policy, if one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_policy: Option<BrowserPolicy>,
    /// Auto-expiry rules. Empty means none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

impl RoomLabels {
    /// Returns `true` when the room uses a single multiplexed port.
    pub fn is_mux(&self) -> bool {
        self.ports.is_mux()
    }

    /// External port interval of the room.
    pub fn epr(&self) -> EprPorts {
        self.ports.epr()
    }
}
