//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Storage failures belong to the store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A product with this id is already registered.
    #[error("product already exists: {0}")]
    DuplicateId(String),

    /// No product is registered under this id.
    #[error("product not found: {0}")]
    NotFound(String),

    /// A stock movement quantity was zero, negative or out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A product field failed validation.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// A withdrawal asked for more units than are on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u64, available: u64 },
}

impl DomainError {
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Stable, machine-readable error kind (used in API error bodies).
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::DuplicateId(_) => "duplicate_id",
            DomainError::NotFound(_) => "not_found",
            DomainError::InvalidQuantity(_) => "invalid_quantity",
            DomainError::InvalidField { .. } => "invalid_field",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(DomainError::duplicate_id("P001").kind(), "duplicate_id");
        assert_eq!(DomainError::not_found("P001").kind(), "not_found");
        assert_eq!(DomainError::invalid_quantity("0").kind(), "invalid_quantity");
        assert_eq!(DomainError::invalid_field("name", "empty").kind(), "invalid_field");
        assert_eq!(
            DomainError::InsufficientStock { requested: 3, available: 1 }.kind(),
            "insufficient_stock"
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            DomainError::not_found("P999").to_string(),
            "product not found: P999"
        );
        assert_eq!(
            DomainError::invalid_field("unitPrice", "must be greater than zero").to_string(),
            "invalid field `unitPrice`: must be greater than zero"
        );
    }
}
