//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root owns the consistency boundary for a cluster of objects.
/// Other aggregates refer to it only through its identifier, never by holding
/// the aggregate itself.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
