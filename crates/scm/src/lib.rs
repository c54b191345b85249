//! Supply-chain management bounded context (suppliers).
//!
//! Procurement only ever sees a supplier through its [`SupplierId`].

pub mod supplier;
pub mod supplier_id;

pub use supplier::Supplier;
pub use supplier_id::SupplierId;
