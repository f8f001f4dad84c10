//! Snapshot export
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/snapshot | GET | whole store in the `SNAPSHOT_PATH` file format |

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use crate::store::Snapshot;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/snapshot", get(export))
}

/// GET /api/snapshot - current store contents, sorted by id
pub async fn export(State(state): State<ServerState>) -> Json<Snapshot> {
    let snapshot = state.store.snapshot();
    tracing::info!(
        inventory = snapshot.inventory.len(),
        sales = snapshot.sales.len(),
        "Snapshot exported"
    );
    Json(snapshot)
}
