use serde::Serialize;

use acme_core::AggregateRoot;
use acme_shared::Address;

/// Aggregate root: Supplier.
///
/// Name and address are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    identifier: String,
    name: String,
    address: Address,
}

impl Supplier {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>, address: Address) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            address,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl AggregateRoot for Supplier {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SupplierId;

    fn test_address() -> Address {
        Address::new("Main St", "12345", "New York", "New York", "NY", "USA")
    }

    #[test]
    fn exposes_fields_as_given() {
        let supplier = Supplier::new("SUP001", "Microsoft, Inc.", test_address());
        assert_eq!(supplier.identifier(), "SUP001");
        assert_eq!(supplier.id(), "SUP001");
        assert_eq!(supplier.name(), "Microsoft, Inc.");
        assert_eq!(supplier.address().city(), "New York");
    }

    #[test]
    fn identifier_wraps_into_supplier_id() {
        let supplier = Supplier::new("SUP001", "Microsoft, Inc.", test_address());
        let id = SupplierId::new(supplier.identifier()).unwrap();
        assert_eq!(id.as_str(), "SUP001");
    }

    #[test]
    fn blank_identifier_is_stored_but_cannot_be_referenced() {
        let supplier = Supplier::new("", "", test_address());
        assert_eq!(supplier.identifier(), "");
        assert!(SupplierId::new(supplier.identifier()).is_err());
    }
}
