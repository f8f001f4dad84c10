//! Input validation
//!
//! Runs before records are stored. The financial engine itself never
//! validates; it defaults whatever it is given.

use shared::models::{InventoryResource, SalesOrder};

use crate::financials::InventoryResolver;
use crate::utils::{AppError, AppResult, ErrorCode};

// ── Limits ──────────────────────────────────────────────────────────

/// Customer, salesperson, cable system names
pub const MAX_NAME_LEN: usize = 200;

/// Ids, order numbers, resource codes
pub const MAX_ID_LEN: usize = 64;

/// Largest accepted money amount (one-time IRU purchases included)
const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Longest accepted term (50 years)
const MAX_TERM_MONTHS: u32 = 600;

// ── Field helpers ───────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.len() > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: Option<&str>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", v.len()),
        ));
    }
    Ok(())
}

/// Money amounts must be finite, non-negative and below [`MAX_AMOUNT`]
fn validate_amount(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must be a finite number, got {value}"),
        ));
    }
    if value < 0.0 {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must be non-negative, got {value}"),
        ));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::invalid_field(
            field,
            format!("{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"),
        ));
    }
    Ok(())
}

fn validate_term(value: u32, field: &str) -> AppResult<()> {
    if value > MAX_TERM_MONTHS {
        return Err(AppError::invalid_field(
            field,
            format!("{field} exceeds maximum allowed ({MAX_TERM_MONTHS} months), got {value}"),
        ));
    }
    Ok(())
}

fn validate_capacity(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must be greater than zero, got {value}"),
        ));
    }
    Ok(())
}

// ── Records ─────────────────────────────────────────────────────────

/// Validate a sales order before it is stored
///
/// Inventory-backed types (Inventory, Hybrid, Swapped Out) must link to a
/// resource that `resolver` knows about.
pub fn validate_sales_order<R>(order: &SalesOrder, resolver: &R) -> AppResult<()>
where
    R: InventoryResolver + ?Sized,
{
    validate_optional_text(Some(&order.id), "id", MAX_ID_LEN)?;
    validate_required_text(&order.customer_name, "customerName", MAX_NAME_LEN)?;
    validate_optional_text(order.salesperson.as_deref(), "salesperson", MAX_NAME_LEN)?;
    validate_optional_text(order.order_number.as_deref(), "orderNumber", MAX_ID_LEN)?;

    validate_capacity(order.capacity.value, "capacity.value")?;

    if order.dates.term == 0 {
        return Err(AppError::required("dates.term"));
    }
    validate_term(order.dates.term, "dates.term")?;
    if let (Some(start), Some(end)) = (order.dates.start, order.dates.end)
        && end < start
    {
        return Err(AppError::invalid_field(
            "dates.end",
            format!("dates.end ({end}) is before dates.start ({start})"),
        ));
    }

    let f = &order.financials;
    validate_amount(f.mrc_sales, "financials.mrcSales")?;
    validate_amount(f.nrc_sales, "financials.nrcSales")?;
    validate_amount(f.otc, "financials.otc")?;
    validate_amount(f.annual_om, "financials.annualOm")?;

    let cable = &order.costs.cable;
    validate_amount(cable.mrc, "costs.cable.mrc")?;
    validate_amount(cable.nrc, "costs.cable.nrc")?;
    validate_amount(cable.otc, "costs.cable.otc")?;
    validate_amount(cable.annual_om, "costs.cable.annualOm")?;
    validate_term(cable.term_months, "costs.cable.termMonths")?;

    for (end, name) in [
        (&order.costs.backhaul.a_end, "aEnd"),
        (&order.costs.backhaul.z_end, "zEnd"),
    ] {
        validate_amount(end.monthly, &format!("costs.backhaul.{name}.monthly"))?;
        validate_amount(end.nrc, &format!("costs.backhaul.{name}.nrc"))?;
        validate_amount(end.otc, &format!("costs.backhaul.{name}.otc"))?;
        validate_amount(end.annual_om, &format!("costs.backhaul.{name}.annualOm"))?;
        validate_term(end.term_months, &format!("costs.backhaul.{name}.termMonths"))?;
    }

    for (end, name) in [
        (&order.costs.cross_connect.a_end, "aEnd"),
        (&order.costs.cross_connect.z_end, "zEnd"),
    ] {
        validate_amount(end.monthly, &format!("costs.crossConnect.{name}.monthly"))?;
        validate_amount(end.nrc, &format!("costs.crossConnect.{name}.nrc"))?;
    }

    validate_amount(order.costs.other_costs.monthly, "costs.otherCosts.monthly")?;
    validate_amount(order.costs.other_costs.one_off, "costs.otherCosts.oneOff")?;

    if order.sales_type.requires_inventory() {
        let link = order.inventory_link.as_deref().ok_or_else(|| {
            AppError::new(ErrorCode::InventoryLinkMissing).with_detail("field", "inventoryLink")
        })?;
        if resolver.resolve(link).is_none() {
            return Err(AppError::with_message(
                ErrorCode::InventoryLinkUnresolved,
                format!("Inventory resource {link} does not exist"),
            )
            .with_detail("inventoryLink", link));
        }
    }

    Ok(())
}

/// Validate an inventory resource before it is stored
pub fn validate_inventory_resource(resource: &InventoryResource) -> AppResult<()> {
    validate_optional_text(Some(&resource.id), "id", MAX_ID_LEN)?;
    validate_optional_text(resource.resource_id.as_deref(), "resourceId", MAX_ID_LEN)?;
    validate_optional_text(resource.cable_system.as_deref(), "cableSystem", MAX_NAME_LEN)?;
    validate_optional_text(resource.segment.as_deref(), "segment", MAX_NAME_LEN)?;

    validate_capacity(resource.capacity.value, "capacity.value")?;

    let f = &resource.financials;
    validate_amount(f.otc, "financials.otc")?;
    validate_amount(f.annual_om_cost, "financials.annualOmCost")?;
    validate_amount(f.mrc, "financials.mrc")?;
    validate_term(f.term, "financials.term")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::financials::NoInventory;
    use chrono::NaiveDate;
    use shared::models::SalesType;
    use std::collections::HashMap;

    fn valid_order() -> SalesOrder {
        let mut order = SalesOrder {
            id: "SO-1".to_string(),
            customer_name: "Acme Telecom".to_string(),
            ..Default::default()
        };
        order.capacity.value = 10.0;
        order.dates.term = 12;
        order.financials.mrc_sales = 1000.0;
        order
    }

    fn inventory() -> HashMap<String, InventoryResource> {
        let resource = InventoryResource {
            id: "INV-1".to_string(),
            ..Default::default()
        };
        HashMap::from([(resource.id.clone(), resource)])
    }

    #[test]
    fn test_valid_resale_order() {
        assert!(validate_sales_order(&valid_order(), &NoInventory).is_ok());
    }

    #[test]
    fn test_customer_required() {
        let mut order = valid_order();
        order.customer_name = "   ".to_string();
        let err = validate_sales_order(&order, &NoInventory).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.details.unwrap()["field"], "customerName");
    }

    #[test]
    fn test_capacity_must_be_positive() {
        let mut order = valid_order();
        order.capacity.value = 0.0;
        let err = validate_sales_order(&order, &NoInventory).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.details.unwrap()["field"], "capacity.value");
    }

    #[test]
    fn test_term_required() {
        let mut order = valid_order();
        order.dates.term = 0;
        let err = validate_sales_order(&order, &NoInventory).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut order = valid_order();
        order.dates.start = NaiveDate::from_ymd_opt(2025, 6, 1);
        order.dates.end = NaiveDate::from_ymd_opt(2025, 1, 1);
        let err = validate_sales_order(&order, &NoInventory).unwrap_err();
        assert_eq!(err.details.unwrap()["field"], "dates.end");
    }

    #[test]
    fn test_negative_and_non_finite_amounts_rejected() {
        let mut order = valid_order();
        order.costs.backhaul.z_end.otc = -5.0;
        let err = validate_sales_order(&order, &NoInventory).unwrap_err();
        assert_eq!(err.details.unwrap()["field"], "costs.backhaul.zEnd.otc");

        let mut order = valid_order();
        order.financials.otc = f64::NAN;
        let err = validate_sales_order(&order, &NoInventory).unwrap_err();
        assert_eq!(err.details.unwrap()["field"], "financials.otc");
    }

    #[test]
    fn test_inventory_types_need_resolvable_link() {
        let store = inventory();

        for sales_type in [SalesType::Inventory, SalesType::Hybrid, SalesType::SwappedOut] {
            let mut order = valid_order();
            order.sales_type = sales_type;

            let err = validate_sales_order(&order, &store).unwrap_err();
            assert_eq!(err.code, ErrorCode::InventoryLinkMissing);

            order.inventory_link = Some("INV-404".to_string());
            let err = validate_sales_order(&order, &store).unwrap_err();
            assert_eq!(err.code, ErrorCode::InventoryLinkUnresolved);

            order.inventory_link = Some("INV-1".to_string());
            assert!(validate_sales_order(&order, &store).is_ok());
        }
    }

    #[test]
    fn test_inventory_resource_validation() {
        let mut resource = InventoryResource {
            id: "INV-1".to_string(),
            ..Default::default()
        };
        assert!(validate_inventory_resource(&resource).is_err());

        resource.capacity.value = 100.0;
        assert!(validate_inventory_resource(&resource).is_ok());

        resource.financials.term = 10_000;
        let err = validate_inventory_resource(&resource).unwrap_err();
        assert_eq!(err.details.unwrap()["field"], "financials.term");
    }
}
