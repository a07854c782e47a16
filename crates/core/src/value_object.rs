//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values are
//! considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: to "modify" one,
/// create a new one with the new values. `Totals` is the canonical example in
/// this workspace — two totals with the same amounts are the same totals.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
