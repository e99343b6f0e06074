//! Room-level queries composed from discovery, the label codec and the entry mapper.
use std::sync::Arc;

use rooms_model::{Labels, RoomEntry, RoomLabels, keys};
use tracing::{debug, instrument};

use crate::{
    codec::{decode_labels, encode_labels},
    context::LabelContext,
    discovery::Discovery,
    entry::container_to_entry,
    error::CoreError,
    runtime::ContainerRuntime,
};

/// Read side of room management for one instance.
///
/// Holds no state besides its dependencies: every call re-reads the runtime.
#[derive(Clone)]
pub struct RoomManager {
    discovery: Discovery,
    ctx: LabelContext,
}

impl RoomManager {
    pub fn new(runtime: Arc<dyn ContainerRuntime>, ctx: LabelContext) -> Self {
        Self {
            discovery: Discovery::new(runtime, ctx.instance_name()),
            ctx,
        }
    }

    pub fn context(&self) -> &LabelContext {
        &self.ctx
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }

    /// All rooms of this instance. One damaged container fails the whole call.
    #[instrument(level = "debug", skip(self), fields(instance = %self.ctx.instance_name()))]
    pub async fn list_rooms(&self) -> Result<Vec<RoomEntry>, CoreError> {
        self.discovery
            .list()
            .await?
            .iter()
            .map(container_to_entry)
            .collect()
    }

    /// Room backed by the container `id`.
    #[instrument(level = "debug", skip(self), fields(instance = %self.ctx.instance_name()))]
    pub async fn get_room(&self, id: &str) -> Result<RoomEntry, CoreError> {
        let container = self.discovery.container_info(id).await?;
        container_to_entry(&container)
    }

    /// Room with the given name.
    #[instrument(level = "debug", skip(self), fields(instance = %self.ctx.instance_name()))]
    pub async fn find_room_by_name(&self, name: &str) -> Result<RoomEntry, CoreError> {
        let containers = self.discovery.list().await?;
        let container = containers
            .iter()
            .find(|c| c.labels.get(keys::NAME) == Some(name))
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;

        debug!(id = %container.id, "room resolved by name");
        container_to_entry(container)
    }

    /// Full descriptor of the room backed by the container `id`.
    #[instrument(level = "debug", skip(self), fields(instance = %self.ctx.instance_name()))]
    pub async fn room_labels(&self, id: &str) -> Result<RoomLabels, CoreError> {
        let container = self.discovery.inspect_container(id).await?;
        Ok(decode_labels(&container.config.labels, &self.ctx)?)
    }

    /// Label set to attach when creating a container for `room`.
    pub fn labels_for_create(&self, room: &RoomLabels) -> Labels {
        encode_labels(room, &self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use rooms_model::{LabelError, PortConfig};

    use super::*;
    use crate::runtime::{ContainerSummary, MemoryRuntime};

    fn ctx() -> LabelContext {
        LabelContext::with_base_url("main", "http://rooms.local")
    }

    fn room(name: &str, ports: PortConfig) -> RoomLabels {
        RoomLabels {
            name: name.to_string(),
            url: String::new(),
            neko_image: "m1k1o/neko:firefox".to_string(),
            ports,
            browser_policy: None,
            constraints: Vec::new(),
        }
    }

    fn provisioned(id: &str, labels: Labels) -> ContainerSummary {
        ContainerSummary {
            id: id.to_string(),
            image: "m1k1o/neko:firefox".to_string(),
            state: "running".to_string(),
            status: "Up 1 second".to_string(),
            created: 1_700_000_000,
            labels,
        }
    }

    fn setup() -> (Arc<MemoryRuntime>, RoomManager) {
        let runtime = Arc::new(MemoryRuntime::new());
        let manager = RoomManager::new(runtime.clone(), ctx());
        (runtime, manager)
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let (runtime, manager) = setup();

        let labels = manager.labels_for_create(&room("alpha", PortConfig::Single(52100)));
        runtime.insert(provisioned("c1", labels));
        let ports = PortConfig::Range {
            min: 52000,
            max: 52004,
        };
        let labels = manager.labels_for_create(&room("beta", ports));
        runtime.insert(provisioned("c2", labels));

        let rooms = manager.list_rooms().await.unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "alpha");
        assert_eq!(rooms[0].url, "http://rooms.local/alpha/");
        assert_eq!(rooms[0].max_connections, 1);
        assert_eq!(rooms[1].name, "beta");
        assert_eq!(rooms[1].max_connections, 5);
    }

    #[tokio::test]
    async fn other_instances_are_invisible() {
        let (runtime, manager) = setup();

        let foreign = LabelContext::with_base_url("staging", "http://rooms.local");
        runtime.insert(provisioned(
            "c9",
            encode_labels(&room("gamma", PortConfig::Single(1)), &foreign),
        ));

        assert!(manager.list_rooms().await.unwrap().is_empty());
        assert!(matches!(
            manager.get_room("c9").await,
            Err(CoreError::NotOwned { .. })
        ));
        assert!(matches!(
            manager.find_room_by_name("gamma").await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn room_labels_decodes_inspected_container() {
        let (runtime, manager) = setup();

        let original = room("alpha", PortConfig::Range { min: 59000, max: 59099 });
        runtime.insert(provisioned("c1", manager.labels_for_create(&original)));

        let decoded = manager.room_labels("c1").await.unwrap();
        assert_eq!(decoded.name, "alpha");
        assert_eq!(decoded.url, "http://rooms.local/alpha/");
        assert_eq!(decoded.ports, original.ports);
    }

    #[tokio::test]
    async fn find_by_name_and_get_agree() {
        let (runtime, manager) = setup();
        runtime.insert(provisioned(
            "c1",
            manager.labels_for_create(&room("alpha", PortConfig::Single(52100))),
        ));

        let by_name = manager.find_room_by_name("alpha").await.unwrap();
        let by_id = manager.get_room("c1").await.unwrap();
        assert_eq!(by_name, by_id);
    }

    #[tokio::test]
    async fn damaged_container_fails_listing() {
        let (runtime, manager) = setup();

        let mut labels = manager.labels_for_create(&room("alpha", PortConfig::Single(52100)));
        labels.0.remove(keys::URL);
        runtime.insert(provisioned("c1", labels));

        match manager.list_rooms().await {
            Err(CoreError::Labels(LabelError::MissingField(key))) => assert_eq!(key, keys::URL),
            other => panic!("expected damaged labels, got {other:?}"),
        }

        // the codec tolerates the same container
        let decoded = manager.room_labels("c1").await.unwrap();
        assert_eq!(decoded.url, "http://rooms.local/alpha/");
    }
}
