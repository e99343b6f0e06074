//! Container runtime abstraction consumed by discovery.
//!
//! Only the two queries the room layer needs are modelled: a filtered listing and a
//! single-container inspect. Connection handling, image pulls and container lifecycle
//! belong to the concrete backend.
mod error;
pub use error::RuntimeError;

mod memory;
pub use memory::MemoryRuntime;

use async_trait::async_trait;
use rooms_model::Labels;
use serde::{Deserialize, Serialize};

/// Runtime state value of a running container.
pub const STATE_RUNNING: &str = "running";

/// One row of a container listing.
///
/// Field names follow the runtime's list API, so a captured listing deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    pub id: String,
    pub image: String,
    /// Machine-readable state (`created`, `running`, `exited`, ...).
    pub state: String,
    /// Human-readable status (`Up 5 minutes`, `Exited (0) 2 hours ago`, ...).
    #[serde(default)]
    pub status: String,
    /// Creation time, seconds since the Unix epoch.
    pub created: i64,
    #[serde(default)]
    pub labels: Labels,
}

/// Detailed state of a single container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInspect {
    pub id: String,
    pub image: String,
    pub state: ContainerState,
    pub config: ContainerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerState {
    pub status: String,
    pub running: bool,
}

/// Configuration the container was created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    pub image: String,
    pub labels: Labels,
}

/// Server-side filters of a container listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    /// Label filters: `key` tests presence, `key=value` tests equality.
    pub labels: Vec<String>,
    /// Id filters: a container matches when its id starts with any of them.
    pub ids: Vec<String>,
}

impl ListFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the label `key` to be present.
    pub fn label(mut self, key: impl Into<String>) -> Self {
        self.labels.push(key.into());
        self
    }

    /// Require the container id to match `id`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }
}

/// Options of a container listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Include stopped containers.
    pub all: bool,
    pub filters: ListFilters,
}

/// Read-only queries against the container runtime.
///
/// Implementations surface their own failures as [`RuntimeError`]; callers pass them
/// through unchanged.
#[async_trait]
pub trait ContainerRuntime: Send + Sync + 'static {
    /// List containers matching `opts`.
    async fn list_containers(
        &self,
        opts: &ListOptions,
    ) -> Result<Vec<ContainerSummary>, RuntimeError>;

    /// Inspect a single container by id.
    async fn inspect_container(&self, id: &str) -> Result<ContainerInspect, RuntimeError>;
}
