use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use acme_core::{AggregateRoot, DomainError, DomainResult};
use acme_scm::SupplierId;
use acme_shared::{CurrencyCode, Money};

use crate::{ProductId, PurchaseOrderItem};

/// Aggregate root: PurchaseOrder.
///
/// The order currency is fixed at construction and stamped on every item
/// added afterwards, so all lines share it. Items are append-only.
///
/// `add_item` takes `&mut self` and the aggregate has no internal locking;
/// sharing an order across threads needs an external writer lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrder {
    order_number: String,
    supplier_id: SupplierId,
    order_date: DateTime<Utc>,
    currency: CurrencyCode,
    items: Vec<PurchaseOrderItem>,
}

impl PurchaseOrder {
    /// Create an order dated now (UTC).
    pub fn new(
        order_number: impl Into<String>,
        supplier_id: SupplierId,
        currency: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_order_date(order_number, supplier_id, Utc::now(), currency)
    }

    /// Create an order with an explicit order date.
    pub fn with_order_date(
        order_number: impl Into<String>,
        supplier_id: SupplierId,
        order_date: DateTime<Utc>,
        currency: impl Into<String>,
    ) -> DomainResult<Self> {
        let currency = CurrencyCode::new(currency)?;
        Ok(Self {
            order_number: order_number.into(),
            supplier_id,
            order_date,
            currency,
            items: Vec::new(),
        })
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn currency(&self) -> &str {
        self.currency.as_str()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[PurchaseOrderItem] {
        &self.items
    }

    /// Append a line priced in the order's currency.
    ///
    /// Validation happens before anything is appended: on error the order is
    /// left untouched. A line whose subtotal, or the order total with it,
    /// would overflow `Decimal` is rejected here so that
    /// `calculate_subtotal` and `calculate_total` cannot fail later.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        unit_price_amount: Decimal,
    ) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument(
                "quantity",
                "quantity must be greater than zero",
            ));
        }
        if unit_price_amount <= Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "unit_price_amount",
                "unit price amount must be greater than zero",
            ));
        }

        let subtotal = Decimal::from(quantity)
            .checked_mul(unit_price_amount)
            .ok_or_else(|| {
                DomainError::invalid_argument("unit_price_amount", "line subtotal overflow")
            })?;
        self.calculate_total()
            .amount()
            .checked_add(subtotal)
            .ok_or_else(|| {
                DomainError::invalid_argument("unit_price_amount", "order total overflow")
            })?;

        let unit_price = Money::in_currency(unit_price_amount, self.currency.clone());
        self.items
            .push(PurchaseOrderItem::new(product_id, quantity, unit_price));
        Ok(())
    }

    /// Sum of all line subtotals in the order's currency.
    ///
    /// Recomputed on every call. Relies on `add_item` stamping the order
    /// currency on each line; any other way of adding lines must re-check it.
    pub fn calculate_total(&self) -> Money {
        let total: Decimal = self
            .items
            .iter()
            .map(|item| item.calculate_subtotal().amount())
            .sum();
        Money::in_currency(total, self.currency.clone())
    }
}

impl AggregateRoot for PurchaseOrder {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.order_number
    }
}
