//! Supply chain management context (suppliers and their addresses).
//!
//! Other contexts reference suppliers only through [`SupplierId`]; the
//! supplier aggregate itself stays here.

pub mod address;
pub mod supplier;

pub use address::Address;
pub use supplier::{Supplier, SupplierId};
