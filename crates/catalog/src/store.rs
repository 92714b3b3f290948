use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use minimarket_core::{DomainError, DomainResult, Entity, ProductId};

use crate::error::{RepositoryError, StoreResult};
use crate::product::Product;
use crate::repository::ProductRepository;

/// Authoritative registry of products, keyed by id, in insertion order.
///
/// All mutations run under one write lock and follow the same cycle: copy the
/// current list, apply the change to the copy, persist the copy, then swap it
/// in. A rejected change or a failed write leaves both memory and storage as
/// they were. Readers clone a snapshot under the read lock.
#[derive(Debug)]
pub struct CatalogStore<R> {
    repository: R,
    products: RwLock<Vec<Product>>,
}

impl<R> CatalogStore<R>
where
    R: ProductRepository,
{
    /// Load the persisted catalog and take ownership of the repository.
    pub fn open(repository: R) -> StoreResult<Self> {
        let products = repository.load()?;
        ensure_unique_ids(&products)?;
        Ok(Self {
            repository,
            products: RwLock::new(products),
        })
    }

    /// All products, in the order they were registered.
    pub fn list_products(&self) -> Vec<Product> {
        self.read().clone()
    }

    pub fn get_product(&self, id: &ProductId) -> StoreResult<Product> {
        self.read()
            .iter()
            .find(|p| p.has_id(id))
            .cloned()
            .ok_or_else(|| DomainError::not_found(id.as_str()).into())
    }

    /// Register a new product. Its id must not already be in use.
    pub fn register_product(&self, product: Product) -> StoreResult<Product> {
        self.mutate(move |products| {
            if products.iter().any(|p| p.has_id(product.id())) {
                return Err(DomainError::duplicate_id(product.id().as_str()));
            }
            products.push(product.clone());
            Ok(product)
        })
    }

    /// Remove a product and return it. Any stock it had is discarded.
    pub fn delete_product(&self, id: &ProductId) -> StoreResult<Product> {
        self.mutate(|products| {
            let idx = products
                .iter()
                .position(|p| p.has_id(id))
                .ok_or_else(|| DomainError::not_found(id.as_str()))?;
            Ok(products.remove(idx))
        })
    }

    /// Apply `change` to one product as a single atomic step and return the
    /// result. If `change` fails, nothing is modified.
    pub fn update_product<F>(&self, id: &ProductId, change: F) -> StoreResult<Product>
    where
        F: FnOnce(&mut Product) -> DomainResult<()>,
    {
        self.mutate(|products| {
            let product = products
                .iter_mut()
                .find(|p| p.has_id(id))
                .ok_or_else(|| DomainError::not_found(id.as_str()))?;
            change(product)?;
            Ok(product.clone())
        })
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn mutate<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Vec<Product>) -> DomainResult<T>,
    {
        let mut current = self.write();
        let mut next = current.clone();
        let out = f(&mut next)?;
        self.repository.save(&next)?;
        *current = next;
        Ok(out)
    }

    // The list is only ever replaced whole, so a poisoned lock still guards
    // a consistent value.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn ensure_unique_ids(products: &[Product]) -> Result<(), RepositoryError> {
    let mut seen = HashSet::with_capacity(products.len());
    for p in products {
        if !seen.insert(p.id()) {
            return Err(RepositoryError::Corrupt(format!(
                "product id {} appears more than once",
                p.id()
            )));
        }
    }
    Ok(())
}
