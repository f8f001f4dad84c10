//! Sales Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{OrderFinancials, SalesOrder};
use shared::util::record_id;

use crate::core::ServerState;
use crate::financials::{compute_order_financials, cost_breakdown};
use crate::utils::validation::validate_sales_order;
use crate::utils::{AppError, AppResult};

/// GET /api/sales - all sales orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SalesOrder>>> {
    Ok(Json(state.store.list_orders()))
}

/// GET /api/sales/:id - one sales order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SalesOrder>> {
    let order = state
        .store
        .get_order(&id)
        .ok_or_else(|| AppError::sales_order_not_found(&id))?;
    Ok(Json(order))
}

/// POST /api/sales - create or replace a sales order
///
/// An order without an id gets a generated `SO-` id.
pub async fn upsert(
    State(state): State<ServerState>,
    Json(mut payload): Json<SalesOrder>,
) -> AppResult<Json<SalesOrder>> {
    if payload.id.trim().is_empty() {
        payload.id = record_id("SO");
    }

    validate_sales_order(&payload, state.store())?;

    let replaced = state.store.upsert_linked_order(payload.clone())?.is_some();
    tracing::info!(
        order_id = %payload.id,
        sales_model = ?payload.sales_model,
        sales_type = ?payload.sales_type,
        replaced,
        "Sales order saved"
    );

    Ok(Json(payload))
}

/// DELETE /api/sales/:id - remove a sales order
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SalesOrder>> {
    let order = state
        .store
        .remove_order(&id)
        .ok_or_else(|| AppError::sales_order_not_found(&id))?;
    tracing::info!(order_id = %id, "Sales order deleted");
    Ok(Json(order))
}

/// GET /api/sales/:id/financials - engine result for a stored order
pub async fn financials(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderFinancials>> {
    let order = state
        .store
        .get_order(&id)
        .ok_or_else(|| AppError::sales_order_not_found(&id))?;

    let resource = order
        .inventory_link
        .as_deref()
        .and_then(|link| state.store.get_resource(link));

    Ok(Json(OrderFinancials {
        order_id: Some(order.id.clone()),
        result: compute_order_financials(&order, state.store()),
        costs: cost_breakdown(&order, resource.as_ref()),
    }))
}
