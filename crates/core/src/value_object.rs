//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new instance. Constructors validate their input and fail fast,
/// so a value object that exists is always valid.
///
/// ```ignore
/// let a = Money::new(dec!(25.99), "USD")?;
/// let b = Money::new(dec!(25.99), "USD")?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
