//! API routes
//!
//! - [`health`] - liveness and version
//! - [`financials`] - form previews
//! - [`sales`] - sales order CRUD and per-order financials
//! - [`inventory`] - inventory resource CRUD
//! - [`dashboard`] - portfolio summary and utilization
//! - [`snapshot`] - store export

pub mod dashboard;
pub mod financials;
pub mod health;
pub mod inventory;
pub mod sales;
pub mod snapshot;

pub use crate::utils::{AppError, AppResult};
