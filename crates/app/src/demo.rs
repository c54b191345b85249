//! The sample supplier and purchase order assembled by the binary.

use rust_decimal_macros::dec;

use acme_core::DomainResult;
use acme_procurement::{ProductId, PurchaseOrder};
use acme_scm::{Supplier, SupplierId};
use acme_shared::Address;

pub fn sample_supplier() -> Supplier {
    let address = Address::new("Main St", "12345", "New York", "New York", "NY", "USA");
    Supplier::new("SUP001", "Microsoft, Inc.", address)
}

/// Order `PO001` in USD for `supplier`, with two lines.
pub fn sample_order(supplier: &Supplier) -> DomainResult<PurchaseOrder> {
    let mut order = PurchaseOrder::new("PO001", SupplierId::new(supplier.identifier())?, "USD")?;

    for (quantity, unit_price) in [(10, dec!(25.99)), (5, dec!(15.99))] {
        let product_id = ProductId::new();
        order.add_item(product_id, quantity, unit_price)?;
        tracing::debug!(
            order_number = order.order_number(),
            %product_id,
            quantity,
            %unit_price,
            "line added"
        );
    }

    tracing::info!(
        order_number = order.order_number(),
        supplier_id = %order.supplier_id(),
        lines = order.items().len(),
        total = %order.calculate_total(),
        "purchase order assembled"
    );
    Ok(order)
}
