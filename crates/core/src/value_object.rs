//! Value object trait: equality by value, not identity.
//!
//! Item names and quantities carry no identity of their own; two values with
//! the same contents are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (e.g. `Quantity::checked_add` returns a fresh quantity).
///
/// Constructors are expected to validate, so an instance that exists is
/// always well-formed:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Quantity(u64);
///
/// impl ValueObject for Quantity {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
