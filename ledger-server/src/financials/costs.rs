//! Cost pools
//!
//! Inventory cost allocation and operating cost derivation. Shared by the
//! persisted-order view and the form preview so both use one cost basis.

use rust_decimal::prelude::*;
use shared::models::{
    BackhaulEnd, CostBreakdown, CostModel, InventoryResource, OrderCosts, Ownership, SalesOrder,
};

use super::{amortize, monthly_from_annual, safe_div, to_decimal, to_f64};

/// Operating costs of an order, per month
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct OperatingCosts {
    pub backhaul: Decimal,
    pub cross_connect: Decimal,
    pub other: Decimal,
}

impl OperatingCosts {
    pub fn total(&self) -> Decimal {
        self.backhaul
            .saturating_add(self.cross_connect)
            .saturating_add(self.other)
    }
}

/// Monthly cost of one backhaul end
///
/// IRU ends amortize the one-time charge over their own term (falling back
/// to the order term) and add a twelfth of the annual O&M.
pub fn backhaul_monthly_cost(end: &BackhaulEnd, order_term: u32) -> Decimal {
    match end.model {
        CostModel::Iru => {
            let term = if end.term_months == 0 {
                order_term
            } else {
                end.term_months
            };
            amortize(end.otc, term).saturating_add(monthly_from_annual(end.annual_om))
        }
        CostModel::Lease => to_decimal(end.monthly),
    }
}

pub(crate) fn derive_operating_costs(costs: &OrderCosts, order_term: u32) -> OperatingCosts {
    let backhaul = backhaul_monthly_cost(&costs.backhaul.a_end, order_term)
        .saturating_add(backhaul_monthly_cost(&costs.backhaul.z_end, order_term));
    let cross_connect = to_decimal(costs.cross_connect.a_end.monthly)
        .saturating_add(to_decimal(costs.cross_connect.z_end.monthly));

    OperatingCosts {
        backhaul,
        cross_connect,
        other: to_decimal(costs.other_costs.monthly),
    }
}

/// Backhaul + cross-connect + other monthly costs
pub fn operating_costs(costs: &OrderCosts, order_term: u32) -> Decimal {
    derive_operating_costs(costs, order_term).total()
}

/// Share of an inventory resource's monthly cost carried by `sales_capacity`
///
/// The resource cost is prorated by `sales_capacity / resource capacity`.
/// IRU-owned resources amortize their purchase over the resource term plus
/// a twelfth of annual O&M; leased ones use the monthly lease.
pub fn inventory_monthly_cost(sales_capacity: f64, resource: &InventoryResource) -> Decimal {
    let ratio = safe_div(
        to_decimal(sales_capacity),
        to_decimal(resource.capacity.effective_value()),
    );
    let financials = &resource.financials;

    let resource_monthly = match resource.acquisition.ownership {
        Ownership::Iru => {
            amortize(financials.otc, financials.term)
                .saturating_add(monthly_from_annual(financials.annual_om_cost))
        }
        Ownership::Leased => to_decimal(financials.mrc),
    };

    resource_monthly.saturating_mul(ratio)
}

/// Inventory cost for the order, zero unless its type draws on inventory
pub(crate) fn order_inventory_cost(
    order: &SalesOrder,
    resource: Option<&InventoryResource>,
) -> Decimal {
    match resource {
        Some(res) if order.sales_type.uses_inventory_cost() => {
            inventory_monthly_cost(order.capacity.effective_value(), res)
        }
        _ => Decimal::ZERO,
    }
}

/// Monthly cost pools for an order, as shown next to a form preview
pub fn cost_breakdown(order: &SalesOrder, resource: Option<&InventoryResource>) -> CostBreakdown {
    let operating = derive_operating_costs(&order.costs, order.term_months());
    let inventory = order_inventory_cost(order, resource);

    CostBreakdown {
        inventory_monthly: to_f64(inventory),
        backhaul_monthly: to_f64(operating.backhaul),
        cross_connect_monthly: to_f64(operating.cross_connect),
        other_monthly: to_f64(operating.other),
        operating_monthly: to_f64(operating.total()),
    }
}
