//! In-memory data store
//!
//! Holds sales orders and inventory resources in `DashMap`s so axum handlers
//! can read and write concurrently without a global lock. The store is the
//! engine's [`InventoryResolver`]; it carries no persistence of its own and
//! can be seeded from a JSON [`Snapshot`] at start-up.

mod snapshot;

pub use snapshot::Snapshot;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared::models::{InventoryResource, SalesOrder};

use crate::financials::InventoryResolver;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Concurrent map of orders and inventory resources keyed by id
#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: DashMap<String, SalesOrder>,
    resources: DashMap<String, InventoryResource>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding every record of `snapshot`
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::new();
        for resource in snapshot.inventory {
            store.upsert_resource(resource);
        }
        for order in snapshot.sales {
            store.upsert_order(order);
        }
        store
    }

    /// Current contents, sorted by id
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            inventory: self.list_resources(),
            sales: self.list_orders(),
        }
    }

    // ========== Sales orders ==========

    /// Insert or replace; returns the previous version if any
    pub fn upsert_order(&self, order: SalesOrder) -> Option<SalesOrder> {
        self.orders.insert(order.id.clone(), order)
    }

    pub fn get_order(&self, id: &str) -> Option<SalesOrder> {
        self.orders.get(id).map(|o| o.value().clone())
    }

    /// All orders sorted by id
    pub fn list_orders(&self) -> Vec<SalesOrder> {
        let mut orders: Vec<SalesOrder> = self.orders.iter().map(|o| o.value().clone()).collect();
        orders.sort_by(|a, b| a.id.cmp(&b.id));
        orders
    }

    pub fn remove_order(&self, id: &str) -> Option<SalesOrder> {
        self.orders.remove(id).map(|(_, o)| o)
    }

    /// Ids of orders whose `inventoryLink` points at `resource_id`, sorted
    pub fn orders_linked_to(&self, resource_id: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .orders
            .iter()
            .filter(|o| o.inventory_link.as_deref() == Some(resource_id))
            .map(|o| o.key().clone())
            .collect();
        ids.sort();
        ids
    }

    // ========== Inventory ==========

    pub fn upsert_resource(&self, resource: InventoryResource) -> Option<InventoryResource> {
        self.resources.insert(resource.id.clone(), resource)
    }

    pub fn get_resource(&self, id: &str) -> Option<InventoryResource> {
        self.resources.get(id).map(|r| r.value().clone())
    }

    /// All resources sorted by id
    pub fn list_resources(&self) -> Vec<InventoryResource> {
        let mut resources: Vec<InventoryResource> =
            self.resources.iter().map(|r| r.value().clone()).collect();
        resources.sort_by(|a, b| a.id.cmp(&b.id));
        resources
    }

    pub fn remove_resource(&self, id: &str) -> Option<InventoryResource> {
        self.resources.remove(id).map(|(_, r)| r)
    }

    // ========== Link-checked writes ==========
    //
    // Both take the resource shard lock before touching the orders map, so a
    // resource cannot disappear between an order's link check and its insert.

    /// Insert or replace an order whose link must resolve when its type
    /// draws on inventory
    pub fn upsert_linked_order(&self, order: SalesOrder) -> AppResult<Option<SalesOrder>> {
        let Some(link) = order.inventory_link.clone() else {
            return Ok(self.upsert_order(order));
        };

        let guard = self.resources.get(&link);
        if guard.is_none() && order.sales_type.requires_inventory() {
            return Err(AppError::with_message(
                ErrorCode::InventoryLinkUnresolved,
                format!("Inventory resource {link} does not exist"),
            )
            .with_detail("inventoryLink", link));
        }

        let previous = self.upsert_order(order);
        drop(guard);
        Ok(previous)
    }

    /// Remove a resource unless an order still links to it
    pub fn remove_unlinked_resource(&self, id: &str) -> AppResult<InventoryResource> {
        let Entry::Occupied(entry) = self.resources.entry(id.to_string()) else {
            return Err(AppError::inventory_not_found(id));
        };

        let linked = self.orders_linked_to(id);
        if !linked.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::InventoryInUse,
                format!("Inventory resource {} is linked by {} sales order(s)", id, linked.len()),
            )
            .with_detail("orders", linked));
        }

        Ok(entry.remove())
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

impl InventoryResolver for MemoryStore {
    fn resolve(&self, id: &str) -> Option<InventoryResource> {
        self.get_resource(id)
    }
}
