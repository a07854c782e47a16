//! Entity trait: identity + continuity across state changes.
//!
//! Products keep their identity through price and stock edits; invoices keep
//! theirs from finalization onward.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
