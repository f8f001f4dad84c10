use std::sync::Arc;

use crate::core::Config;
use crate::store::{MemoryStore, Snapshot};
use crate::utils::AppResult;

/// Server state shared by every handler
///
/// Cloning is cheap: the store sits behind an `Arc`.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | store | Arc<MemoryStore> | sales orders and inventory resources |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<MemoryStore>,
}

impl ServerState {
    pub fn new(config: Config, store: MemoryStore) -> Self {
        Self {
            config,
            store: Arc::new(store),
        }
    }

    /// Build the state, seeding the store from `config.snapshot_path` when set
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let store = match &config.snapshot_path {
            Some(path) => MemoryStore::from_snapshot(Snapshot::load(path)?),
            None => MemoryStore::new(),
        };

        tracing::info!(
            orders = store.order_count(),
            resources = store.resource_count(),
            "Store initialized"
        );

        Ok(Self::new(config.clone(), store))
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}
