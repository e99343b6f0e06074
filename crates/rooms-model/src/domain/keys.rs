//! Well-known container label keys.
//!
//! These keys are the contract between the provisioning step that creates room containers
//! and everything that reads them back. They are case-sensitive and dot-delimited under
//! [`NAMESPACE`].

/// Common prefix of every room label.
pub const NAMESPACE: &str = "m1k1o.neko_rooms";

/// Name of the deployment instance that owns the container.
///
/// Containers without this key, or with a different value, are never treated as rooms.
pub const INSTANCE: &str = "m1k1o.neko_rooms.instance";

/// Unique human-readable room name.
pub const NAME: &str = "m1k1o.neko_rooms.name";

/// Externally reachable room URL.
pub const URL: &str = "m1k1o.neko_rooms.url";

/// Image backing the room.
pub const NEKO_IMAGE: &str = "m1k1o.neko_rooms.neko_image";

/// Single multiplexed port. Mutually exclusive with [`EPR_MIN`] / [`EPR_MAX`].
pub const MUX: &str = "m1k1o.neko_rooms.mux";

/// Lower bound of the external port range.
pub const EPR_MIN: &str = "m1k1o.neko_rooms.epr.min";

/// Upper bound of the external port range.
pub const EPR_MAX: &str = "m1k1o.neko_rooms.epr.max";

/// Gate for the browser policy block; only the literal `"true"` enables it.
pub const BROWSER_POLICY: &str = "m1k1o.neko_rooms.browser_policy";
pub const BROWSER_POLICY_TYPE: &str = "m1k1o.neko_rooms.browser_policy.type";
pub const BROWSER_POLICY_PATH: &str = "m1k1o.neko_rooms.browser_policy.path";

/// Gate for the constraints block; only the literal `"true"` enables it.
pub const CONSTRAINS: &str = "m1k1o.neko_rooms.constrains";
pub const CONSTRAINS_TTL_TIME: &str = "m1k1o.neko_rooms.constrains.time_to_live.time";
pub const CONSTRAINS_TTL_ACTION: &str = "m1k1o.neko_rooms.constrains.time_to_live.action";
pub const CONSTRAINS_EMPTY_THRESHOLD: &str = "m1k1o.neko_rooms.constrains.empty_room.threshold";
pub const CONSTRAINS_EMPTY_ACTION: &str = "m1k1o.neko_rooms.constrains.empty_room.action";

/// Literal value that switches on an optional label block.
pub const ENABLED: &str = "true";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keys_live_under_namespace() {
        let all = [
            INSTANCE,
            NAME,
            URL,
            NEKO_IMAGE,
            MUX,
            EPR_MIN,
            EPR_MAX,
            BROWSER_POLICY,
            BROWSER_POLICY_TYPE,
            BROWSER_POLICY_PATH,
            CONSTRAINS,
            CONSTRAINS_TTL_TIME,
            CONSTRAINS_TTL_ACTION,
            CONSTRAINS_EMPTY_THRESHOLD,
            CONSTRAINS_EMPTY_ACTION,
        ];

        for key in all {
            assert!(
                key.starts_with(&format!("{NAMESPACE}.")),
                "{key} is outside of the label namespace"
            );
        }
    }
}
