//! Sales order financial computation
//!
//! Derives monthly revenue, profit and margin for a sales order under the
//! Lease and IRU commercial models crossed with the Resale, Inventory, Hybrid
//! and Swapped Out sales types.
//!
//! The computation is pure: the linked inventory resource is supplied through
//! an [`InventoryResolver`] (or passed in already resolved), nothing is
//! mutated, and identical inputs always produce identical output. It never
//! fails. Missing values are zero, zero denominators yield zero.
//!
//! All arithmetic is carried in `Decimal` and converted to `f64` only at the
//! result boundary. Sums, differences and products saturate at the `Decimal`
//! range instead of overflowing, so every result is finite. Results are not
//! rounded; formatting belongs to callers.

mod costs;
mod engine;

pub use costs::{backhaul_monthly_cost, cost_breakdown, inventory_monthly_cost, operating_costs};
pub use engine::{compute_order_financials, compute_with_resource};

use std::collections::HashMap;

use rust_decimal::prelude::*;
use shared::models::InventoryResource;

/// Looks up inventory resources by id for the engine
///
/// Implemented by the in-memory store, by plain maps, and by [`NoInventory`]
/// for callers without any inventory at hand.
pub trait InventoryResolver {
    fn resolve(&self, id: &str) -> Option<InventoryResource>;
}

impl InventoryResolver for HashMap<String, InventoryResource> {
    fn resolve(&self, id: &str) -> Option<InventoryResource> {
        self.get(id).cloned()
    }
}

impl InventoryResolver for [InventoryResource] {
    fn resolve(&self, id: &str) -> Option<InventoryResource> {
        self.iter().find(|r| r.id == id).cloned()
    }
}

impl<T: InventoryResolver + ?Sized> InventoryResolver for &T {
    fn resolve(&self, id: &str) -> Option<InventoryResource> {
        (**self).resolve(id)
    }
}

/// Resolver that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInventory;

impl InventoryResolver for NoInventory {
    fn resolve(&self, _id: &str) -> Option<InventoryResource> {
        None
    }
}

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Convert f64 to Decimal for calculation
///
/// Records are deserialized leniently so non-finite values should never get
/// here; if one does it is logged and treated as zero. Finite values beyond
/// the `Decimal` range saturate to `Decimal::MAX` / `Decimal::MIN`.
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    if let Some(d) = Decimal::from_f64(value) {
        return d;
    }
    if !value.is_finite() {
        tracing::warn!(value = ?value, "Non-finite value in financial calculation, defaulting to zero");
        return Decimal::ZERO;
    }
    if value.abs() < 1.0 {
        // Below the smallest representable scale
        return Decimal::ZERO;
    }
    let saturated = if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    };
    tracing::warn!(value = ?value, "Value out of decimal range, saturating");
    saturated
}

/// Convert Decimal back to f64 at the result boundary (no rounding)
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// `numerator / denominator`, zero when the denominator is zero
///
/// A quotient beyond the `Decimal` range saturates.
#[inline]
pub(crate) fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() || numerator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Percentage of `part` in `whole`, zero unless `whole` is positive
#[inline]
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        safe_div(part, whole).saturating_mul(Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    }
}

/// Spread an annual figure over twelve months
#[inline]
pub(crate) fn monthly_from_annual(annual: f64) -> Decimal {
    to_decimal(annual) / MONTHS_PER_YEAR
}

/// Amortize a one-time amount over a term in months (zero term -> zero)
#[inline]
pub(crate) fn amortize(one_time: f64, term_months: u32) -> Decimal {
    safe_div(to_decimal(one_time), Decimal::from(term_months))
}
