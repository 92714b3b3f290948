use std::sync::Arc;

use minimarket_catalog::{CatalogStore, Product, ProductRepository, StoreResult};
use minimarket_core::{DomainError, DomainResult, ProductId};

use crate::report::{InventoryReport, LowStockReport};

/// Stock movements and valuation over a shared [`CatalogStore`].
///
/// Every movement is one `update_product` call on the store, so it is
/// applied and persisted atomically with respect to other operations.
#[derive(Debug)]
pub struct InventoryLedger<R> {
    catalog: Arc<CatalogStore<R>>,
}

impl<R> Clone for InventoryLedger<R> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
        }
    }
}

impl<R> InventoryLedger<R>
where
    R: ProductRepository,
{
    pub fn new(catalog: Arc<CatalogStore<R>>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<CatalogStore<R>> {
        &self.catalog
    }

    /// Reception of merchandise: add `quantity` units to a product's stock.
    ///
    /// The quantity is checked before the product is looked up.
    pub fn receive_stock(&self, id: &ProductId, quantity: i64) -> StoreResult<Product> {
        let quantity = positive_quantity(quantity)?;
        self.catalog.update_product(id, |p| p.add_stock(quantity))
    }

    /// Take `quantity` units out of stock (the stock side of a sale).
    pub fn withdraw_stock(&self, id: &ProductId, quantity: i64) -> StoreResult<Product> {
        let quantity = positive_quantity(quantity)?;
        self.catalog.update_product(id, |p| p.remove_stock(quantity))
    }

    /// Value of everything on hand, computed from one catalog snapshot.
    pub fn valuation_report(&self) -> InventoryReport {
        InventoryReport::from_products(&self.catalog.list_products())
    }

    /// Products whose stock is at or below `limit`.
    pub fn low_stock(&self, limit: u64) -> LowStockReport {
        LowStockReport::from_products(self.catalog.list_products(), limit)
    }
}

fn positive_quantity(quantity: i64) -> DomainResult<u64> {
    if quantity <= 0 {
        return Err(DomainError::invalid_quantity(format!(
            "quantity must be greater than zero (got {quantity})"
        )));
    }
    Ok(quantity.unsigned_abs())
}
