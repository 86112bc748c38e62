//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain values compared by their attributes;
/// they carry no identity. `Money { 100, "EUR" }` equals any other
/// `Money { 100, "EUR" }`, while two entities are the same only when their
/// identifiers match (see [`Entity`](crate::entity::Entity)).
///
/// To "modify" a value object, build a new one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
