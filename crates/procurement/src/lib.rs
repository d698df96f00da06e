//! Procurement domain module (purchase orders placed with suppliers).
//!
//! This crate contains business rules for purchase orders, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Suppliers belong to
//! the SCM context and are referenced here only by [`acme_scm::SupplierId`].

pub mod item;
pub mod order;
pub mod product_id;

pub use item::PurchaseOrderItem;
pub use order::PurchaseOrder;
pub use product_id::ProductId;
