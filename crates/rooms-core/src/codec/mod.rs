//! Label codec: [`RoomLabels`] <-> container label set.
//!
//! Decoding is strict about the fields whose absence means corruption (name, image, ports,
//! an enabled browser policy) and tolerant about the URL, which older containers never carried.
//! Encoding always regenerates the URL from the name and stamps the instance name from the
//! [`LabelContext`], never from the descriptor.
mod ports;
pub use ports::{decode_ports, encode_ports};

#[cfg(feature = "constraints")]
mod constraints;

use rooms_model::{BrowserPolicy, LabelError, LabelResult, Labels, RoomLabels, keys};
use tracing::trace;

use crate::context::LabelContext;

/// Decode a container label set into a [`RoomLabels`] descriptor.
///
/// Fails atomically with the first problem found; a missing URL falls back to the URL template.
pub fn decode_labels(labels: &Labels, ctx: &LabelContext) -> LabelResult<RoomLabels> {
    let name = required(labels, keys::NAME)?;

    let url = match labels.get(keys::URL) {
        Some(url) => url.to_string(),
        None => {
            trace!(room = name, "url label absent, deriving from template");
            ctx.room_url(name)
        }
    };

    let neko_image = required(labels, keys::NEKO_IMAGE)?;
    let ports = decode_ports(labels)?;

    let browser_policy = if labels.get(keys::BROWSER_POLICY) == Some(keys::ENABLED) {
        Some(BrowserPolicy::new(
            required(labels, keys::BROWSER_POLICY_TYPE)?,
            required(labels, keys::BROWSER_POLICY_PATH)?,
        ))
    } else {
        None
    };

    #[cfg(feature = "constraints")]
    let constraints = constraints::decode_constraints(labels)?;
    #[cfg(not(feature = "constraints"))]
    let constraints = Vec::new();

    let room = RoomLabels {
        name: name.to_string(),
        url,
        neko_image: neko_image.to_string(),
        ports,
        browser_policy,
        constraints,
    };
    trace!(room = ?room, "decoded room labels");
    Ok(room)
}

/// Encode a [`RoomLabels`] descriptor into the label set attached at container creation.
pub fn encode_labels(room: &RoomLabels, ctx: &LabelContext) -> Labels {
    let mut labels = Labels::new();
    labels
        .insert(keys::NAME, room.name.as_str())
        .insert(keys::URL, ctx.room_url(&room.name))
        .insert(keys::INSTANCE, ctx.instance_name())
        .insert(keys::NEKO_IMAGE, room.neko_image.as_str());

    encode_ports(&room.ports, &mut labels);

    if let Some(policy) = &room.browser_policy {
        labels
            .insert(keys::BROWSER_POLICY, keys::ENABLED)
            .insert(keys::BROWSER_POLICY_TYPE, policy.kind.as_str())
            .insert(keys::BROWSER_POLICY_PATH, policy.path.as_str());
    }

    #[cfg(feature = "constraints")]
    constraints::encode_constraints(&room.constraints, &mut labels);

    labels
}

/// Value of a label that must be present.
pub(crate) fn required<'a>(labels: &'a Labels, key: &'static str) -> LabelResult<&'a str> {
    labels.get(key).ok_or(LabelError::MissingField(key))
}
