use rust_decimal::Decimal;
use serde::Serialize;

use acme_shared::Money;

use crate::ProductId;

/// One line of a purchase order.
///
/// Only [`PurchaseOrder::add_item`](crate::PurchaseOrder::add_item) creates
/// items, after checking that the quantity and unit price are positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrderItem {
    product_id: ProductId,
    quantity: i64,
    unit_price: Money,
}

impl PurchaseOrderItem {
    pub(crate) fn new(product_id: ProductId, quantity: i64, unit_price: Money) -> Self {
        debug_assert!(quantity > 0);
        debug_assert!(unit_price.amount() > Decimal::ZERO);
        Self {
            product_id,
            quantity,
            unit_price,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> &Money {
        &self.unit_price
    }

    /// Quantity times unit price, in the unit price's currency.
    pub fn calculate_subtotal(&self) -> Money {
        Money::in_currency(
            Decimal::from(self.quantity) * self.unit_price.amount(),
            self.unit_price.currency_code().clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn subtotal_is_quantity_times_unit_price() {
        let item = PurchaseOrderItem::new(
            ProductId::new(),
            10,
            Money::new(dec!(25.99), "USD").unwrap(),
        );
        let subtotal = item.calculate_subtotal();
        assert_eq!(subtotal.amount(), dec!(259.90));
        assert_eq!(subtotal.currency(), "USD");
        assert_eq!(subtotal.to_string(), "259.90 USD");
    }

    #[test]
    fn subtotal_is_repeatable() {
        let item = PurchaseOrderItem::new(
            ProductId::new(),
            5,
            Money::new(dec!(15.99), "EUR").unwrap(),
        );
        assert_eq!(item.calculate_subtotal(), item.calculate_subtotal());
        assert_eq!(item.calculate_subtotal().amount(), dec!(79.95));
    }
}
