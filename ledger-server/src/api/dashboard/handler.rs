//! Dashboard API Handlers

use axum::{Json, extract::State};
use shared::models::{PortfolioSummary, ResourceUtilization};

use crate::core::ServerState;
use crate::dashboard::{inventory_utilization, summarize};
use crate::utils::AppResult;

/// GET /api/dashboard - portfolio totals
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<PortfolioSummary>> {
    let orders = state.store.list_orders();
    Ok(Json(summarize(&orders, state.store())))
}

/// GET /api/dashboard/utilization - capacity sold per inventory resource
pub async fn utilization(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<ResourceUtilization>>> {
    let resources = state.store.list_resources();
    let orders = state.store.list_orders();
    Ok(Json(inventory_utilization(&resources, &orders)))
}
