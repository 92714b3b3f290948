//! Product catalog: the authoritative registry of products, keyed by id.
//!
//! `Product` values are validated on construction, so the store only ever
//! holds well-formed records. Persistence is behind [`ProductRepository`];
//! the store itself does no IO of its own.

pub mod error;
pub mod product;
pub mod repository;
pub mod store;

pub use error::{RepositoryError, StoreError, StoreResult};
pub use product::{Product, ProductDraft, UnitPrice};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use store::CatalogStore;
