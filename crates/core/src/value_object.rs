//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// Two value objects with the same attribute values are the same value; there
/// is no identity to track across changes. "Modifying" one means constructing
/// a new one.
///
/// Example: an account code `1105-Caja` is a value object — any two line items
/// carrying that code refer to the same account. A `Project` is an entity: two
/// projects with identical fields but different ids are distinct.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
