//! JSON snapshot used to seed the store
//!
//! ```json
//! { "inventory": [ { "id": "INV-1", ... } ], "sales": [ { "id": "SO-1", ... } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{InventoryResource, SalesOrder};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Snapshot {
    pub inventory: Vec<InventoryResource>,
    pub sales: Vec<SalesOrder>,
}

impl Snapshot {
    /// Load a snapshot file
    ///
    /// A missing file yields an empty snapshot; unreadable or malformed
    /// files are errors.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Snapshot file not found, starting empty");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_message(
                ErrorCode::SnapshotLoadFailed,
                format!("Failed to read snapshot {}: {}", path.display(), e),
            )
        })?;

        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| {
            AppError::with_message(
                ErrorCode::SnapshotLoadFailed,
                format!("Malformed snapshot {}: {}", path.display(), e),
            )
            .with_detail("line", e.line())
        })?;

        tracing::info!(
            inventory = snapshot.inventory.len(),
            sales = snapshot.sales.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }
}
