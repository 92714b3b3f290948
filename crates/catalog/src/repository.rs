//! Persistence seam for the catalog.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::RepositoryError;
use crate::product::Product;

/// Durable storage for the full product list.
///
/// The catalog is small, so the contract is whole-snapshot: `save` replaces
/// everything previously stored, in the given order. A successful `save`
/// must be durable before it returns.
pub trait ProductRepository: Send + Sync {
    /// Load every stored product, in stored order. An empty store is `Ok(vec![])`.
    fn load(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Replace the stored products with `products`.
    fn save(&self, products: &[Product]) -> Result<(), RepositoryError>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> Result<(), RepositoryError> {
        (**self).save(products)
    }
}

/// Non-durable repository for tests and `--in-memory` runs.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing product list (as if it had been persisted).
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: Mutex::new(products),
        }
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.inner.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, products: &[Product]) -> Result<(), RepositoryError> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = products.to_vec();
        Ok(())
    }
}
