//! Financial Result Model
//!
//! Output of the financial computation engine. Presentation layers format
//! these figures; no rounding or currency formatting happens here.

use serde::{Deserialize, Serialize};

/// Per-order profitability figures
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialResult {
    /// Recurring monthly revenue
    pub monthly_revenue: f64,
    /// Recurring monthly profit
    pub monthly_profit: f64,
    /// `monthly_profit / monthly_revenue * 100`, 0 when revenue is 0
    pub margin_percent: f64,
    /// IRU model sold against third-party cable (dual-horizon figures below apply)
    pub is_iru_resale: bool,
    /// Month-one profit including the one-time charge
    pub first_month_profit: f64,
    pub first_month_margin: f64,
    /// Steady-state monthly profit after month one
    pub recurring_monthly_profit: f64,
    pub recurring_margin: f64,
}

impl FinancialResult {
    /// All-zero result
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Monthly cost pools behind a result, shown next to form previews
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Prorated share of the linked inventory resource
    pub inventory_monthly: f64,
    /// Both backhaul ends, IRU ends amortized
    pub backhaul_monthly: f64,
    pub cross_connect_monthly: f64,
    pub other_monthly: f64,
    /// Backhaul + cross-connect + other
    pub operating_monthly: f64,
}

/// Engine result with the cost pools it was derived from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderFinancials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub result: FinancialResult,
    pub costs: CostBreakdown,
}
