use rooms_model::{RoomEntry, keys};
use time::OffsetDateTime;

use crate::{
    codec::{decode_ports, required},
    error::CoreError,
    runtime::{ContainerSummary, STATE_RUNNING},
};

/// Project a listed container into its public [`RoomEntry`].
///
/// Unlike the full codec this requires the `url` label verbatim; there is no template
/// fallback here.
pub fn container_to_entry(container: &ContainerSummary) -> Result<RoomEntry, CoreError> {
    let name = required(&container.labels, keys::NAME)?;
    let url = required(&container.labels, keys::URL)?;
    let ports = decode_ports(&container.labels)?;

    let created = OffsetDateTime::from_unix_timestamp(container.created).map_err(|_| {
        CoreError::InvalidTimestamp {
            id: container.id.clone(),
            created: container.created,
        }
    })?;

    Ok(RoomEntry {
        id: container.id.clone(),
        name: name.to_string(),
        url: url.to_string(),
        image: container.image.clone(),
        running: container.state == STATE_RUNNING,
        status: container.status.clone(),
        created,
        max_connections: ports.max_connections(),
    })
}
