use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Public view of a room, combining its labels with the container's current runtime state.
///
/// Never stored: rebuilt from the container every time it is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomEntry {
    /// Container identifier.
    pub id: String,
    pub name: String,
    pub url: String,
    /// Image reported by the runtime.
    pub image: String,
    /// `true` when the runtime reports the container state as `running`.
    pub running: bool,
    /// Free-text runtime status (e.g. `"Up 3 minutes"`).
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    /// `max - min + 1` of the room's port interval.
    pub max_connections: u32,
}
