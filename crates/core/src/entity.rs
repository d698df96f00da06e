//! Entity trait: identity + continuity across state changes.

/// Something with a stable identity, e.g. a supplier (`SupplierId`) or a
/// purchase order (its order number).
///
/// Two entities are "the same" when their ids match, even if other
/// attributes differ; equality of the Rust values is a separate question.
pub trait Entity {
    /// Identifier type; must be usable as a map key.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
