//! Aggregate root trait for domain models that own a cluster of objects.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// An aggregate root is the only entry point for mutating the objects it owns.
/// Owned children are exposed read-only (e.g. as slices) and can only change
/// through methods on the root, which validate before mutating.
///
/// There is no infrastructure here: no versioning, no event application, no
/// repositories. Contexts that need those layer them on top.
pub trait AggregateRoot: Entity {}
