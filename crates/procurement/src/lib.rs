//! Procurement domain module (purchase orders).
//!
//! This crate contains business rules for purchase orders, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod item;
pub mod order;
pub mod product_id;

pub use item::PurchaseOrderItem;
pub use order::PurchaseOrder;
pub use product_id::ProductId;
