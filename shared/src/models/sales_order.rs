//! Sales Order Model
//!
//! A contract selling cable capacity to a customer. Every field is optional
//! on the wire; missing values fall back to the defaults the financial engine
//! expects (Lease model, Resale type, capacity 1, 12-month term).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::util::lenient;

/// Term used when an order carries none
pub const DEFAULT_TERM_MONTHS: u32 = 12;

/// Commercial model of the sale
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SalesModel {
    /// Recurring monthly billing
    #[default]
    Lease,
    /// One-time capacity purchase plus recurring O&M fee
    #[serde(rename = "IRU")]
    Iru,
}

/// Which cost pools the order draws on
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SalesType {
    /// Billed against third-party leased cable cost
    #[default]
    Resale,
    /// Billed against the seller's own inventory resource
    Inventory,
    /// Third-party segment plus owned inventory segment
    Hybrid,
    /// Capacity swap, recognized at zero profit
    #[serde(rename = "Swapped Out", alias = "SwappedOut")]
    SwappedOut,
}

impl SalesType {
    /// Types that must carry an `inventoryLink`
    pub fn requires_inventory(&self) -> bool {
        matches!(self, Self::Inventory | Self::Hybrid | Self::SwappedOut)
    }

    /// Types whose cost basis includes the linked inventory resource
    pub fn uses_inventory_cost(&self) -> bool {
        matches!(self, Self::Inventory | Self::Hybrid)
    }
}

/// Pricing model of a single cost line (cable or backhaul end)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CostModel {
    #[default]
    Lease,
    #[serde(rename = "IRU")]
    Iru,
}

/// Capacity sold, e.g. `{ "value": 10, "unit": "Gbps" }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Capacity {
    #[serde(deserialize_with = "lenient::f64")]
    pub value: f64,
    pub unit: String,
}

impl Capacity {
    /// Capacity used for ratio math: zero/absent becomes 1
    pub fn effective_value(&self) -> f64 {
        if self.value == 0.0 { 1.0 } else { self.value }
    }
}

/// Contract dates
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderDates {
    #[serde(deserialize_with = "lenient::date")]
    pub start: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient::date")]
    pub end: Option<NaiveDate>,
    /// Contract term in months (0 means "not set")
    #[serde(deserialize_with = "lenient::months")]
    pub term: u32,
}

/// Revenue side of the order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SalesFinancials {
    /// Monthly recurring charge (Lease)
    #[serde(deserialize_with = "lenient::f64")]
    pub mrc_sales: f64,
    /// Non-recurring charge (Lease)
    #[serde(deserialize_with = "lenient::f64")]
    pub nrc_sales: f64,
    /// One-time charge (IRU)
    #[serde(deserialize_with = "lenient::f64")]
    pub otc: f64,
    /// Annual operations & maintenance revenue (IRU)
    #[serde(deserialize_with = "lenient::f64")]
    pub annual_om: f64,
}

/// Third-party cable cost (lease or IRU priced)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CableCost {
    pub model: CostModel,
    #[serde(deserialize_with = "lenient::f64")]
    pub mrc: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub nrc: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub otc: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub annual_om: f64,
    #[serde(deserialize_with = "lenient::months")]
    pub term_months: u32,
}

/// One backhaul end (access link), lease or IRU priced
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BackhaulEnd {
    pub model: CostModel,
    /// Flat monthly rate (Lease)
    #[serde(deserialize_with = "lenient::f64")]
    pub monthly: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub nrc: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub otc: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub annual_om: f64,
    #[serde(deserialize_with = "lenient::months")]
    pub term_months: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BackhaulCosts {
    pub a_end: BackhaulEnd,
    pub z_end: BackhaulEnd,
}

/// Cross-connect fee at one end: flat monthly plus one-time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrossConnectEnd {
    #[serde(deserialize_with = "lenient::f64")]
    pub monthly: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub nrc: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CrossConnectCosts {
    pub a_end: CrossConnectEnd,
    pub z_end: CrossConnectEnd,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OtherCosts {
    #[serde(deserialize_with = "lenient::f64")]
    pub monthly: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub one_off: f64,
}

/// Cost inputs of an order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderCosts {
    pub cable: CableCost,
    pub backhaul: BackhaulCosts,
    pub cross_connect: CrossConnectCosts,
    pub other_costs: OtherCosts,
}

/// Sales order entity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub order_number: Option<String>,
    pub customer_name: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub salesperson: Option<String>,
    pub sales_model: SalesModel,
    pub sales_type: SalesType,
    pub capacity: Capacity,
    pub dates: OrderDates,
    pub financials: SalesFinancials,
    /// Id of the backing InventoryResource
    #[serde(deserialize_with = "lenient::opt_string")]
    pub inventory_link: Option<String>,
    pub costs: OrderCosts,
}

impl SalesOrder {
    /// Contract term in months, 12 when unset
    pub fn term_months(&self) -> u32 {
        if self.dates.term == 0 {
            DEFAULT_TERM_MONTHS
        } else {
            self.dates.term
        }
    }
}
