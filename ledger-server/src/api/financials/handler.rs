//! Financials API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::models::{InventoryResource, OrderFinancials, SalesOrder};

use crate::core::ServerState;
use crate::financials::{compute_with_resource, cost_breakdown};
use crate::utils::AppResult;

/// Body of a form preview: the order being edited and, optionally, the
/// resource it is edited against
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PreviewRequest {
    pub order: SalesOrder,
    pub resource: Option<InventoryResource>,
}

/// POST /api/financials/preview - compute an unsaved order
///
/// Without a `resource` in the body the order's `inventoryLink` is looked up
/// in the store. Nothing is validated or stored.
pub async fn preview(
    State(state): State<ServerState>,
    Json(payload): Json<PreviewRequest>,
) -> AppResult<Json<OrderFinancials>> {
    let PreviewRequest { order, resource } = payload;

    let resource = resource.or_else(|| {
        order
            .inventory_link
            .as_deref()
            .and_then(|link| state.store.get_resource(link))
    });

    Ok(Json(OrderFinancials {
        order_id: None,
        result: compute_with_resource(&order, resource.as_ref()),
        costs: cost_breakdown(&order, resource.as_ref()),
    }))
}
