//! Portfolio dashboard DTOs

use serde::{Deserialize, Serialize};

/// Order counts split by commercial dimension
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SalesBreakdown {
    pub lease: usize,
    pub iru: usize,
    pub resale: usize,
    pub inventory: usize,
    pub hybrid: usize,
    pub swapped_out: usize,
}

/// Aggregated profitability across all sales orders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub order_count: usize,
    pub breakdown: SalesBreakdown,
    pub total_monthly_revenue: f64,
    pub total_monthly_profit: f64,
    /// Total profit over total revenue, 0 when there is no revenue
    pub average_margin_percent: f64,
    /// Extra month-one profit from IRU resale one-time charges
    pub total_first_month_uplift: f64,
}

/// How much of an inventory resource has been sold
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUtilization {
    pub resource_id: String,
    pub total_capacity: f64,
    pub sold_capacity: f64,
    /// Never negative; oversold resources report 0
    pub remaining_capacity: f64,
    pub utilization_percent: f64,
    pub linked_orders: usize,
}
