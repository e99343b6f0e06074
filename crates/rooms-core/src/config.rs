use serde::{Deserialize, Serialize};

use crate::{context::LabelContext, error::CoreError};

/// Settings shared by every room operation of this process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomsConfig {
    /// Name stamped onto, and required from, every managed container.
    pub instance_name: String,
    /// Base URL rooms are served under.
    pub rooms_url: String,
}

impl Default for RoomsConfig {
    fn default() -> Self {
        Self {
            instance_name: "neko-rooms".to_string(),
            rooms_url: "http://127.0.0.1:8080/".to_string(),
        }
    }
}

impl RoomsConfig {
    /// Reject settings no room operation can work with.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.instance_name.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "instance_name cannot be empty".into(),
            ));
        }
        if self.rooms_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig("rooms_url cannot be empty".into()));
        }
        Ok(())
    }

    /// Build the context consumed by the codec, discovery and manager.
    pub fn label_context(&self) -> LabelContext {
        LabelContext::with_base_url(self.instance_name.clone(), self.rooms_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let cfg: RoomsConfig = serde_json::from_str(r#"{"instance_name": "staging"}"#).unwrap();
        assert_eq!(cfg.instance_name, "staging");
        assert_eq!(cfg.rooms_url, RoomsConfig::default().rooms_url);
    }

    #[test]
    fn validate_rejects_blank_instance() {
        let cfg = RoomsConfig {
            instance_name: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn label_context_uses_configured_values() {
        let cfg = RoomsConfig {
            instance_name: "staging".into(),
            rooms_url: "https://rooms.example.com/".into(),
        };
        let ctx = cfg.label_context();

        assert_eq!(ctx.instance_name(), "staging");
        assert_eq!(ctx.room_url("demo"), "https://rooms.example.com/demo/");
    }
}
