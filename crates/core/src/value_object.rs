//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute values
/// are the same value. In this workspace `Rgb` is the canonical example, while a
/// `LocationRecord` is an entity identified by its `LocationId`.
///
/// Value objects are immutable; to "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
