//! Data models
//!
//! Records exchanged between the ledger server and its clients (via API).
//! Every input record deserializes from camelCase JSON with all fields optional.

pub mod financials;
pub mod inventory;
pub mod portfolio;
pub mod sales_order;

// Re-exports
pub use financials::*;
pub use inventory::*;
pub use portfolio::*;
pub use sales_order::*;
