//! Entity trait: identity that survives state changes.
//!
//! A product keeps its id while its stock moves up and down; lookups in the
//! catalog go through this trait rather than comparing whole records.

/// Anything addressed by a stable identifier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when this entity is the one addressed by `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
