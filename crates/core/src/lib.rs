//! `acme-core` — shared kernel for the ACME bounded contexts.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the entity/aggregate/value-object traits and the monetary
//! value objects every context prices things with.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use money::{Currency, Money};
pub use value_object::ValueObject;
