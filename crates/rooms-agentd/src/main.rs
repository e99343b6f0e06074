//! Lists the rooms of one instance from a captured container listing.
//!
//! Usage: `rooms-agentd <containers.json> [config.json]`
//!
//! `containers.json` is the runtime's container-list response (an array of objects with
//! `Id`, `Image`, `State`, `Status`, `Created`, `Labels`). `config.json` holds an
//! [`AgentConfig`]; defaults apply when it is omitted.
use std::{path::Path, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rooms_core::prelude::{ContainerSummary, MemoryRuntime, RoomManager, RoomsConfig};
use rooms_model::RoomEntry;
use rooms_observe::{LoggerConfig, init_logger};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AgentConfig {
    rooms: RoomsConfig,
    logger: LoggerConfig,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let snapshot = args
        .next()
        .context("usage: rooms-agentd <containers.json> [config.json]")?;
    let cfg = match args.next() {
        Some(path) => load_config(Path::new(&path)).await?,
        None => AgentConfig::default(),
    };

    // 1) logger
    let logger = cfg.logger.clone().with_env_overrides()?;
    init_logger(&logger)?;

    // 2) runtime snapshot
    cfg.rooms.validate()?;
    let raw = tokio::fs::read_to_string(&snapshot)
        .await
        .with_context(|| format!("reading container listing {snapshot}"))?;
    let containers: Vec<ContainerSummary> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing container listing {snapshot}"))?;
    info!(containers = containers.len(), "container listing loaded");

    // 3) rooms
    let runtime = Arc::new(MemoryRuntime::with_containers(containers));
    let manager = RoomManager::new(runtime, cfg.rooms.label_context());
    let rooms: Vec<RoomEntry> = manager.list_rooms().await?;
    if rooms.is_empty() {
        warn!(instance = %cfg.rooms.instance_name, "no rooms found for instance");
    }

    println!("{}", serde_json::to_string_pretty(&rooms)?);
    Ok(())
}

async fn load_config(path: &Path) -> anyhow::Result<AgentConfig> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}
