//! Entity trait: identity + continuity across state changes.

/// Marker + minimal interface for domain objects with identity.
///
/// An entity stays "the same thing" while its fields change: a renamed
/// project is still that project, a seat keeps its id as line items are
/// edited. Contrast with [`crate::ValueObject`], where only the attribute
/// values matter.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
