//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::InventoryResource;
use shared::util::record_id;

use crate::core::ServerState;
use crate::utils::validation::validate_inventory_resource;
use crate::utils::{AppError, AppResult};

/// GET /api/inventory - all inventory resources
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryResource>>> {
    Ok(Json(state.store.list_resources()))
}

/// GET /api/inventory/:id - one inventory resource
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryResource>> {
    let resource = state
        .store
        .get_resource(&id)
        .ok_or_else(|| AppError::inventory_not_found(&id))?;
    Ok(Json(resource))
}

/// POST /api/inventory - create or replace an inventory resource
pub async fn upsert(
    State(state): State<ServerState>,
    Json(mut payload): Json<InventoryResource>,
) -> AppResult<Json<InventoryResource>> {
    if payload.id.trim().is_empty() {
        payload.id = record_id("INV");
    }

    validate_inventory_resource(&payload)?;

    let replaced = state.store.upsert_resource(payload.clone()).is_some();
    tracing::info!(resource_id = %payload.id, replaced, "Inventory resource saved");

    Ok(Json(payload))
}

/// DELETE /api/inventory/:id - remove a resource no order links to
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryResource>> {
    let resource = state.store.remove_unlinked_resource(&id)?;
    tracing::info!(resource_id = %id, "Inventory resource deleted");
    Ok(Json(resource))
}
