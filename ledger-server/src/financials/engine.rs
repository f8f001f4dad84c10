//! Financial computation engine
//!
//! Branches over (sales model × sales type):
//!
//! | Model | Type      | Monthly revenue           | Monthly profit                                        |
//! |-------|-----------|---------------------------|-------------------------------------------------------|
//! | Lease | Resale    | MRC                       | MRC - cable - operating                               |
//! | Lease | Inventory | MRC                       | MRC - inventory - operating                           |
//! | Lease | Hybrid    | MRC                       | MRC - inventory - cable - operating                   |
//! | IRU   | Resale    | annual O&M / 12           | recurring O&M profit - operating                      |
//! | IRU   | Inventory | OTC / term + O&M / 12     | revenue - inventory - operating                       |
//! | IRU   | Hybrid    | OTC / term + O&M / 12     | revenue - inventory - cable OTC/term - cable O&M - op |
//!
//! Swapped Out orders always produce an all-zero result.

use rust_decimal::prelude::*;
use shared::models::{
    CostModel, FinancialResult, InventoryResource, SalesModel, SalesOrder, SalesType,
};

use super::costs::{derive_operating_costs, order_inventory_cost};
use super::{InventoryResolver, amortize, monthly_from_annual, percent_of, to_decimal, to_f64};

/// Cost inputs shared by every branch
struct BranchInputs {
    inventory: Decimal,
    operating: Decimal,
}

/// Month-one vs steady-state figures of an IRU resale
struct DualHorizon {
    first_month_profit: Decimal,
    first_month_revenue: Decimal,
    recurring_profit: Decimal,
    recurring_revenue: Decimal,
}

/// Revenue and profit before margins are derived
#[derive(Default)]
struct Figures {
    revenue: Decimal,
    profit: Decimal,
    dual_horizon: Option<DualHorizon>,
}

impl Figures {
    fn recurring(revenue: Decimal, profit: Decimal) -> Self {
        Self {
            revenue,
            profit,
            dual_horizon: None,
        }
    }

    fn into_result(self) -> FinancialResult {
        let mut result = FinancialResult {
            monthly_revenue: to_f64(self.revenue),
            monthly_profit: to_f64(self.profit),
            margin_percent: to_f64(percent_of(self.profit, self.revenue)),
            ..FinancialResult::zero()
        };

        if let Some(dual) = self.dual_horizon {
            result.is_iru_resale = true;
            result.first_month_profit = to_f64(dual.first_month_profit);
            result.first_month_margin =
                to_f64(percent_of(dual.first_month_profit, dual.first_month_revenue));
            result.recurring_monthly_profit = to_f64(dual.recurring_profit);
            result.recurring_margin =
                to_f64(percent_of(dual.recurring_profit, dual.recurring_revenue));
        }

        result
    }
}

/// Compute the financials of an order, resolving its inventory link through `resolver`
///
/// An `inventoryLink` that does not resolve is not an error: the inventory
/// cost is taken as zero.
pub fn compute_order_financials<R>(order: &SalesOrder, resolver: &R) -> FinancialResult
where
    R: InventoryResolver + ?Sized,
{
    if order.sales_type == SalesType::SwappedOut {
        return FinancialResult::zero();
    }

    let resource = if order.sales_type.uses_inventory_cost() {
        resolve_link(order, resolver)
    } else {
        None
    };

    compute_with_resource(order, resource.as_ref())
}

fn resolve_link<R>(order: &SalesOrder, resolver: &R) -> Option<InventoryResource>
where
    R: InventoryResolver + ?Sized,
{
    let link = order.inventory_link.as_deref()?;
    let resource = resolver.resolve(link);
    if resource.is_none() {
        tracing::debug!(
            order_id = %order.id,
            inventory_link = %link,
            "Inventory link unresolved, inventory cost taken as zero"
        );
    }
    resource
}

/// Compute the financials of an order against an already-resolved resource
///
/// Used by form previews, where the caller holds the resource it is editing
/// against. Swapped Out orders are zero here too.
pub fn compute_with_resource(
    order: &SalesOrder,
    resource: Option<&InventoryResource>,
) -> FinancialResult {
    if order.sales_type == SalesType::SwappedOut {
        return FinancialResult::zero();
    }

    let inputs = BranchInputs {
        inventory: order_inventory_cost(order, resource),
        operating: derive_operating_costs(&order.costs, order.term_months()).total(),
    };

    let figures = match order.sales_model {
        SalesModel::Lease => lease_figures(order, &inputs),
        SalesModel::Iru => iru_figures(order, &inputs),
    };

    figures.into_result()
}

/// Cable cost charged against a lease sale
fn lease_cable_cost(order: &SalesOrder) -> Decimal {
    let cable = &order.costs.cable;
    match cable.model {
        CostModel::Lease => to_decimal(cable.mrc),
        CostModel::Iru => monthly_from_annual(cable.annual_om),
    }
}

fn lease_figures(order: &SalesOrder, inputs: &BranchInputs) -> Figures {
    let revenue = to_decimal(order.financials.mrc_sales);

    let profit = match order.sales_type {
        SalesType::Resale => revenue
            .saturating_sub(lease_cable_cost(order))
            .saturating_sub(inputs.operating),
        SalesType::Inventory => revenue
            .saturating_sub(inputs.inventory)
            .saturating_sub(inputs.operating),
        SalesType::Hybrid => revenue
            .saturating_sub(inputs.inventory)
            .saturating_sub(lease_cable_cost(order))
            .saturating_sub(inputs.operating),
        // Returned early by the callers
        SalesType::SwappedOut => return Figures::default(),
    };

    Figures::recurring(revenue, profit)
}

fn iru_figures(order: &SalesOrder, inputs: &BranchInputs) -> Figures {
    let financials = &order.financials;
    let cable = &order.costs.cable;
    let term = order.term_months();

    let monthly_om_revenue = monthly_from_annual(financials.annual_om);
    let cable_monthly_om = monthly_from_annual(cable.annual_om);

    match order.sales_type {
        SalesType::Resale => {
            let otc_revenue = to_decimal(financials.otc);
            let otc_profit = otc_revenue.saturating_sub(to_decimal(cable.otc));
            let monthly_om_profit = monthly_om_revenue.saturating_sub(cable_monthly_om);
            let recurring_profit = monthly_om_profit.saturating_sub(inputs.operating);

            // Generic fields carry the steady-state view
            Figures {
                revenue: monthly_om_revenue,
                profit: recurring_profit,
                dual_horizon: Some(DualHorizon {
                    first_month_profit: otc_profit
                        .saturating_add(monthly_om_profit)
                        .saturating_sub(inputs.operating),
                    first_month_revenue: otc_revenue.saturating_add(monthly_om_revenue),
                    recurring_profit,
                    recurring_revenue: monthly_om_revenue,
                }),
            }
        }
        SalesType::Inventory => {
            let revenue = amortize(financials.otc, term).saturating_add(monthly_om_revenue);
            let profit = revenue
                .saturating_sub(inputs.inventory)
                .saturating_sub(inputs.operating);
            Figures::recurring(revenue, profit)
        }
        SalesType::Hybrid => {
            let revenue = amortize(financials.otc, term).saturating_add(monthly_om_revenue);
            let cable_term = if cable.term_months == 0 {
                term
            } else {
                cable.term_months
            };
            let cable_monthly_otc = amortize(cable.otc, cable_term);
            let profit = revenue
                .saturating_sub(inputs.inventory)
                .saturating_sub(cable_monthly_otc)
                .saturating_sub(cable_monthly_om)
                .saturating_sub(inputs.operating);
            Figures::recurring(revenue, profit)
        }
        // Returned early by the callers
        SalesType::SwappedOut => Figures::default(),
    }
}
