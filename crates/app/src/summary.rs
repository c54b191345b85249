//! Human-readable purchase order summary.

use acme_procurement::PurchaseOrder;
use acme_scm::Supplier;

/// Lines describing `order`: a header, one line per item subtotal, the total.
pub fn render(order: &PurchaseOrder, supplier: &Supplier) -> Vec<String> {
    let mut lines = Vec::with_capacity(order.items().len() + 2);
    lines.push(format!(
        "Purchase Order ID: {} created on {} for supplier {}",
        order.order_number(),
        order.order_date(),
        supplier.name()
    ));
    lines.extend(
        order
            .items()
            .iter()
            .map(|item| format!("Item Subtotal: {}", item.calculate_subtotal())),
    );
    lines.push(format!("Total: {}", order.calculate_total()));
    lines
}
