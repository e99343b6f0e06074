//! Container discovery with instance-ownership filtering.
//!
//! The runtime can only pre-filter on presence of the instance label; the exact
//! instance-name comparison done here is the real ownership gate.
use std::sync::Arc;

use rooms_model::{Labels, keys};
use tracing::{debug, instrument, trace, warn};

use crate::{
    error::CoreError,
    runtime::{ContainerInspect, ContainerRuntime, ContainerSummary, ListFilters, ListOptions},
};

/// Finds the containers owned by one instance.
#[derive(Clone)]
pub struct Discovery {
    runtime: Arc<dyn ContainerRuntime>,
    instance_name: String,
}

impl Discovery {
    pub fn new(runtime: Arc<dyn ContainerRuntime>, instance_name: impl Into<String>) -> Self {
        Self {
            runtime,
            instance_name: instance_name.into(),
        }
    }

    /// Instance whose containers this discovery returns.
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// Returns `true` if the label set declares this instance as owner.
    pub fn is_owned(&self, labels: &Labels) -> bool {
        labels.get(keys::INSTANCE) == Some(self.instance_name.as_str())
    }

    /// All containers, in any state, owned by this instance.
    ///
    /// An empty result is a normal outcome.
    #[instrument(level = "debug", skip(self), fields(instance = %self.instance_name))]
    pub async fn list(&self) -> Result<Vec<ContainerSummary>, CoreError> {
        let opts = ListOptions {
            all: true,
            filters: ListFilters::new().label(keys::INSTANCE),
        };

        let candidates = self.runtime.list_containers(&opts).await?;
        let total = candidates.len();

        let owned: Vec<_> = candidates
            .into_iter()
            .filter(|c| {
                let owned = self.is_owned(&c.labels);
                if !owned {
                    trace!(id = %c.id, "skipping container owned by another instance");
                }
                owned
            })
            .collect();

        debug!(total, owned = owned.len(), "listed room containers");
        Ok(owned)
    }

    /// Look up one container by id through the filtered listing.
    ///
    /// A container without the instance label never reaches the candidate set and yields
    /// [`CoreError::NotFound`]; one labelled for another instance yields
    /// [`CoreError::NotOwned`].
    #[instrument(level = "debug", skip(self), fields(instance = %self.instance_name))]
    pub async fn container_info(&self, id: &str) -> Result<ContainerSummary, CoreError> {
        let opts = ListOptions {
            all: true,
            filters: ListFilters::new().id(id).label(keys::INSTANCE),
        };

        let mut candidates = self.runtime.list_containers(&opts).await?;
        if candidates.len() > 1 {
            warn!(
                matches = candidates.len(),
                "container id is ambiguous, using the first match"
            );
        }
        if candidates.is_empty() {
            return Err(CoreError::NotFound(id.to_string()));
        }

        let container = candidates.swap_remove(0);
        if !self.is_owned(&container.labels) {
            debug!(id = %container.id, "container belongs to another instance");
            return Err(CoreError::NotOwned {
                id: container.id,
                instance: self.instance_name.clone(),
            });
        }

        Ok(container)
    }

    /// Inspect one container directly.
    ///
    /// Existence failures are whatever the runtime reports; ownership is checked on the
    /// inspected configuration labels.
    #[instrument(level = "debug", skip(self), fields(instance = %self.instance_name))]
    pub async fn inspect_container(&self, id: &str) -> Result<ContainerInspect, CoreError> {
        let container = self.runtime.inspect_container(id).await?;

        if !self.is_owned(&container.config.labels) {
            debug!(id = %container.id, "inspected container belongs to another instance");
            return Err(CoreError::NotOwned {
                id: container.id,
                instance: self.instance_name.clone(),
            });
        }

        Ok(container)
    }
}
