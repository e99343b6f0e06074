use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use rooms_model::Labels;
use tracing::trace;

use crate::runtime::{
    ContainerConfig, ContainerInspect, ContainerRuntime, ContainerState, ContainerSummary,
    ListFilters, ListOptions, RuntimeError, STATE_RUNNING,
};

/// In-process [`ContainerRuntime`] backed by a fixed set of container records.
///
/// Applies filters the way the real runtime does: `all` toggles stopped containers,
/// label filters test presence (`key`) or equality (`key=value`), id filters match by prefix.
#[derive(Debug, Default)]
pub struct MemoryRuntime {
    containers: RwLock<Vec<ContainerSummary>>,
}

impl MemoryRuntime {
    /// Create an empty runtime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runtime holding the given containers.
    pub fn with_containers(containers: Vec<ContainerSummary>) -> Self {
        Self {
            containers: RwLock::new(containers),
        }
    }

    /// Add a container, replacing any record with the same id.
    pub fn insert(&self, container: ContainerSummary) {
        let mut guard = self.containers.write().unwrap_or_else(PoisonError::into_inner);
        guard.retain(|c| c.id != container.id);
        guard.push(container);
    }

    /// Remove a container by exact id. Returns `true` if it existed.
    pub fn remove(&self, id: &str) -> bool {
        let mut guard = self.containers.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|c| c.id != id);
        guard.len() != before
    }

    fn snapshot(&self) -> Vec<ContainerSummary> {
        self.containers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ContainerRuntime for MemoryRuntime {
    async fn list_containers(
        &self,
        opts: &ListOptions,
    ) -> Result<Vec<ContainerSummary>, RuntimeError> {
        let out: Vec<_> = self
            .snapshot()
            .into_iter()
            .filter(|c| opts.all || c.state == STATE_RUNNING)
            .filter(|c| matches_filters(&opts.filters, c))
            .collect();

        trace!(matched = out.len(), "memory runtime listed containers");
        Ok(out)
    }

    async fn inspect_container(&self, id: &str) -> Result<ContainerInspect, RuntimeError> {
        let containers = self.snapshot();

        let found = match containers.iter().find(|c| c.id == id) {
            Some(exact) => exact,
            None => {
                let mut by_prefix = containers
                    .iter()
                    .filter(|c| !id.is_empty() && c.id.starts_with(id));
                match (by_prefix.next(), by_prefix.next()) {
                    (Some(one), None) => one,
                    (Some(_), Some(_)) => {
                        return Err(RuntimeError::new(format!(
                            "multiple containers match id prefix: {id}"
                        )));
                    }
                    _ => return Err(RuntimeError::new(format!("no such container: {id}"))),
                }
            }
        };

        Ok(ContainerInspect {
            id: found.id.clone(),
            image: found.image.clone(),
            state: ContainerState {
                status: found.state.clone(),
                running: found.state == STATE_RUNNING,
            },
            config: ContainerConfig {
                image: found.image.clone(),
                labels: found.labels.clone(),
            },
        })
    }
}

fn matches_filters(filters: &ListFilters, container: &ContainerSummary) -> bool {
    let ids_ok = filters.ids.is_empty()
        || filters
            .ids
            .iter()
            .any(|id| !id.is_empty() && container.id.starts_with(id.as_str()));

    ids_ok
        && filters
            .labels
            .iter()
            .all(|f| matches_label(&container.labels, f))
}

fn matches_label(labels: &Labels, filter: &str) -> bool {
    match filter.split_once('=') {
        Some((key, value)) => labels.get(key) == Some(value),
        None => labels.contains_key(filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(id: &str, state: &str, labels: &[(&str, &str)]) -> ContainerSummary {
        ContainerSummary {
            id: id.to_string(),
            image: "img".to_string(),
            state: state.to_string(),
            status: String::new(),
            created: 0,
            labels: labels.iter().copied().collect(),
        }
    }

    fn runtime() -> MemoryRuntime {
        MemoryRuntime::with_containers(vec![
            container("aaa111", "running", &[("owner", "a")]),
            container("aaa222", "exited", &[("owner", "b")]),
            container("bbb333", "running", &[]),
        ])
    }

    fn ids(list: &[ContainerSummary]) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[tokio::test]
    async fn list_hides_stopped_unless_all() {
        let rt = runtime();

        let running = rt.list_containers(&ListOptions::default()).await.unwrap();
        assert_eq!(ids(&running), vec!["aaa111", "bbb333"]);

        let all = rt
            .list_containers(&ListOptions {
                all: true,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn label_filter_tests_presence_or_equality() {
        let rt = runtime();

        let present = ListOptions {
            all: true,
            filters: ListFilters::new().label("owner"),
        };
        assert_eq!(
            ids(&rt.list_containers(&present).await.unwrap()),
            vec!["aaa111", "aaa222"]
        );

        let equal = ListOptions {
            all: true,
            filters: ListFilters::new().label("owner=b"),
        };
        assert_eq!(ids(&rt.list_containers(&equal).await.unwrap()), vec!["aaa222"]);
    }

    #[tokio::test]
    async fn id_filter_matches_prefix() {
        let rt = runtime();
        let opts = ListOptions {
            all: true,
            filters: ListFilters::new().id("aaa"),
        };
        assert_eq!(
            ids(&rt.list_containers(&opts).await.unwrap()),
            vec!["aaa111", "aaa222"]
        );
    }

    #[tokio::test]
    async fn inspect_resolves_unique_prefix() {
        let rt = runtime();

        let found = rt.inspect_container("bbb").await.unwrap();
        assert_eq!(found.id, "bbb333");
        assert!(found.state.running);

        let err = rt.inspect_container("aaa").await.unwrap_err();
        assert!(err.to_string().contains("multiple"), "{err}");

        let err = rt.inspect_container("zzz").await.unwrap_err();
        assert_eq!(err.to_string(), "no such container: zzz");
    }

    #[tokio::test]
    async fn insert_replaces_and_remove_drops() {
        let rt = runtime();
        rt.insert(container("bbb333", "exited", &[]));
        assert!(!rt.inspect_container("bbb333").await.unwrap().state.running);

        assert!(rt.remove("bbb333"));
        assert!(!rt.remove("bbb333"));
        assert!(rt.inspect_container("bbb333").await.is_err());
    }
}
