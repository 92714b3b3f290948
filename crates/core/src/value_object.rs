//! Value object trait: equality by value, not identity.
//!
//! A unit price of 2.50 is the same value wherever it appears; a product with
//! id `P001` is the same product whatever its price. The first is a value
//! object, the second an [`Entity`](crate::Entity).

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "change" one,
/// construct a new one; constructors are where validation lives, so a value
/// object that exists is a valid one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
