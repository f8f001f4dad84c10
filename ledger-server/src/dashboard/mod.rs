//! Portfolio dashboard
//!
//! Aggregates engine results across many orders. Sums are carried in
//! `Decimal` like the engine itself and saturate at its range.

use std::collections::HashMap;

use rust_decimal::prelude::*;
use shared::models::{
    InventoryResource, PortfolioSummary, ResourceUtilization, SalesBreakdown, SalesModel,
    SalesOrder, SalesType,
};

use crate::financials::{
    InventoryResolver, compute_order_financials, percent_of, to_decimal, to_f64,
};

/// Totals, margins and per-type counts over `orders`
///
/// The first-month uplift only counts IRU resale orders, the one branch with
/// a month-one view that differs from the recurring one.
pub fn summarize<R>(orders: &[SalesOrder], resolver: &R) -> PortfolioSummary
where
    R: InventoryResolver + ?Sized,
{
    let mut breakdown = SalesBreakdown::default();
    let mut revenue = Decimal::ZERO;
    let mut profit = Decimal::ZERO;
    let mut uplift = Decimal::ZERO;

    for order in orders {
        match order.sales_model {
            SalesModel::Lease => breakdown.lease += 1,
            SalesModel::Iru => breakdown.iru += 1,
        }
        match order.sales_type {
            SalesType::Resale => breakdown.resale += 1,
            SalesType::Inventory => breakdown.inventory += 1,
            SalesType::Hybrid => breakdown.hybrid += 1,
            SalesType::SwappedOut => breakdown.swapped_out += 1,
        }

        let result = compute_order_financials(order, resolver);
        revenue = revenue.saturating_add(to_decimal(result.monthly_revenue));
        profit = profit.saturating_add(to_decimal(result.monthly_profit));
        if result.is_iru_resale {
            let order_uplift = to_decimal(result.first_month_profit)
                .saturating_sub(to_decimal(result.recurring_monthly_profit));
            uplift = uplift.saturating_add(order_uplift);
        }
    }

    PortfolioSummary {
        order_count: orders.len(),
        breakdown,
        total_monthly_revenue: to_f64(revenue),
        total_monthly_profit: to_f64(profit),
        average_margin_percent: to_f64(percent_of(profit, revenue)),
        total_first_month_uplift: to_f64(uplift),
    }
}

/// Capacity sold against each resource, sorted by resource id
///
/// Every order that links to a resource counts, whatever its sales type.
/// Links to unknown resources are ignored.
pub fn inventory_utilization(
    resources: &[InventoryResource],
    orders: &[SalesOrder],
) -> Vec<ResourceUtilization> {
    let mut sold: HashMap<&str, (Decimal, usize)> = HashMap::new();
    for order in orders {
        if let Some(link) = order.inventory_link.as_deref() {
            let entry = sold.entry(link).or_default();
            entry.0 = entry.0.saturating_add(to_decimal(order.capacity.value));
            entry.1 += 1;
        }
    }

    let mut rows: Vec<ResourceUtilization> = resources
        .iter()
        .map(|resource| {
            let total = to_decimal(resource.capacity.value);
            let (sold_capacity, linked_orders) =
                sold.get(resource.id.as_str()).copied().unwrap_or_default();
            let remaining = total.saturating_sub(sold_capacity).max(Decimal::ZERO);

            ResourceUtilization {
                resource_id: resource.id.clone(),
                total_capacity: to_f64(total),
                sold_capacity: to_f64(sold_capacity),
                remaining_capacity: to_f64(remaining),
                utilization_percent: to_f64(percent_of(sold_capacity, total)),
                linked_orders,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.resource_id.cmp(&b.resource_id));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financials::NoInventory;
    use shared::models::{Capacity, InventoryFinancials};

    fn order(id: &str, model: SalesModel, sales_type: SalesType) -> SalesOrder {
        let mut order = SalesOrder {
            id: id.to_string(),
            customer_name: "Acme".to_string(),
            sales_model: model,
            sales_type,
            ..Default::default()
        };
        order.dates.term = 12;
        order.capacity.value = 10.0;
        order
    }

    fn resource(id: &str, capacity: f64) -> InventoryResource {
        InventoryResource {
            id: id.to_string(),
            capacity: Capacity {
                value: capacity,
                unit: "Gbps".to_string(),
            },
            financials: InventoryFinancials {
                mrc: 1000.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_summarize_totals_and_breakdown() {
        let mut lease = order("SO-1", SalesModel::Lease, SalesType::Resale);
        lease.financials.mrc_sales = 1000.0;
        lease.costs.cable.mrc = 350.0;

        let mut iru = order("SO-2", SalesModel::Iru, SalesType::Resale);
        iru.financials.otc = 6000.0;
        iru.financials.annual_om = 1200.0;
        iru.costs.cable.annual_om = 600.0;

        let swapped = order("SO-3", SalesModel::Lease, SalesType::SwappedOut);

        let summary = summarize(&[lease, iru, swapped], &NoInventory);

        assert_eq!(summary.order_count, 3);
        assert_eq!(summary.breakdown.lease, 2);
        assert_eq!(summary.breakdown.iru, 1);
        assert_eq!(summary.breakdown.resale, 2);
        assert_eq!(summary.breakdown.swapped_out, 1);
        // 1000 + 100 revenue, 650 + 50 profit
        assert_eq!(summary.total_monthly_revenue, 1100.0);
        assert_eq!(summary.total_monthly_profit, 700.0);
        // IRU resale month one: 6050 vs recurring 50
        assert_eq!(summary.total_first_month_uplift, 6000.0);
        assert!((summary.average_margin_percent - 700.0 / 1100.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty_portfolio() {
        let summary = summarize(&[], &NoInventory);
        assert_eq!(summary, PortfolioSummary::default());
    }

    #[test]
    fn test_summarize_resolves_inventory() {
        let mut sale = order("SO-1", SalesModel::Lease, SalesType::Inventory);
        sale.financials.mrc_sales = 1000.0;
        sale.inventory_link = Some("INV-1".to_string());

        let resources = [resource("INV-1", 40.0)];
        let summary = summarize(&[sale], &resources[..]);

        // 10 of 40 Gbps against a 1000 MRC resource
        assert_eq!(summary.total_monthly_profit, 750.0);
    }

    #[test]
    fn test_inventory_utilization() {
        let mut a = order("SO-1", SalesModel::Lease, SalesType::Inventory);
        a.inventory_link = Some("INV-1".to_string());
        let mut b = order("SO-2", SalesModel::Iru, SalesType::SwappedOut);
        b.inventory_link = Some("INV-1".to_string());
        b.capacity.value = 15.0;
        let mut stray = order("SO-3", SalesModel::Lease, SalesType::Hybrid);
        stray.inventory_link = Some("INV-404".to_string());

        let rows = inventory_utilization(
            &[resource("INV-2", 0.0), resource("INV-1", 100.0)],
            &[a, b, stray],
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].resource_id, "INV-1");
        assert_eq!(rows[0].sold_capacity, 25.0);
        assert_eq!(rows[0].remaining_capacity, 75.0);
        assert_eq!(rows[0].utilization_percent, 25.0);
        assert_eq!(rows[0].linked_orders, 2);

        assert_eq!(rows[1].resource_id, "INV-2");
        assert_eq!(rows[1].utilization_percent, 0.0);
        assert_eq!(rows[1].linked_orders, 0);
    }

    #[test]
    fn test_oversold_resource_has_no_negative_remainder() {
        let mut sale = order("SO-1", SalesModel::Lease, SalesType::Inventory);
        sale.inventory_link = Some("INV-1".to_string());
        sale.capacity.value = 150.0;

        let rows = inventory_utilization(&[resource("INV-1", 100.0)], &[sale]);
        assert_eq!(rows[0].remaining_capacity, 0.0);
        assert_eq!(rows[0].utilization_percent, 150.0);
    }
}
