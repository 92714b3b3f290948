use thiserror::Error;

use minimarket_core::DomainError;

/// Result type for catalog and inventory operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of the persistence backend behind a [`ProductRepository`](crate::ProductRepository).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage io error: {0}")]
    Io(String),

    #[error("storage encoding error: {0}")]
    Encoding(String),

    /// Persisted data decoded but breaks a catalog invariant.
    #[error("corrupt catalog data: {0}")]
    Corrupt(String),
}

/// Error returned by [`CatalogStore`](crate::CatalogStore) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl StoreError {
    /// Stable, machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Domain(e) => e.kind(),
            StoreError::Repository(_) => "storage_error",
        }
    }

    /// The domain error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            StoreError::Domain(e) => Some(e),
            StoreError::Repository(_) => None,
        }
    }
}
