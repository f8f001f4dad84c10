//! Inventory Resource Model
//!
//! A unit of owned (IRU) or leased capacity that can be partially resold
//! across several sales orders.

use serde::{Deserialize, Serialize};

use super::sales_order::Capacity;
use crate::util::lenient;

/// How the seller holds the resource
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Ownership {
    #[serde(rename = "IRU")]
    Iru,
    #[default]
    Leased,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Acquisition {
    pub ownership: Ownership,
}

/// Acquisition cost of the resource
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryFinancials {
    /// One-time purchase cost (IRU)
    #[serde(deserialize_with = "lenient::f64")]
    pub otc: f64,
    /// Amortization term in months (IRU)
    #[serde(deserialize_with = "lenient::months")]
    pub term: u32,
    /// Annual O&M cost (IRU)
    #[serde(deserialize_with = "lenient::f64")]
    pub annual_om_cost: f64,
    /// Monthly lease cost (Leased)
    #[serde(deserialize_with = "lenient::f64")]
    pub mrc: f64,
}

/// Inventory resource entity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryResource {
    pub id: String,
    /// Human-facing resource code
    #[serde(deserialize_with = "lenient::opt_string")]
    pub resource_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub cable_system: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub segment: Option<String>,
    pub capacity: Capacity,
    pub acquisition: Acquisition,
    pub financials: InventoryFinancials,
}
