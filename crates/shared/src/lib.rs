//! Shared kernel value objects used by more than one bounded context.

pub mod address;
pub mod money;

pub use address::Address;
pub use money::{CurrencyCode, Money};
