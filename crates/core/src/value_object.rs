//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Money`
/// values with the same amount and currency are interchangeable, and two
/// `ProductId`s wrapping the same UUID are the same product reference.
///
/// Implementors expose no mutators. "Changing" a value object means building
/// a new one through its validating constructor, so every live instance
/// satisfies its invariants.
///
/// ```
/// use acme_core::Money;
/// use rust_decimal::Decimal;
///
/// let a = Money::new(Decimal::new(1500, 2), "USD").unwrap();
/// let b = Money::new(Decimal::new(1500, 2), "USD").unwrap();
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
