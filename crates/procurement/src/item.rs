use rust_decimal::Decimal;
use serde::Serialize;

use acme_core::{DomainError, DomainResult, Money};

use crate::product_id::ProductId;

/// A single line of a purchase order: which product, how many, at what price.
///
/// Immutable once built. The line total is checked for overflow at
/// construction, so [`PurchaseOrderItem::calculate_item_total`] cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrderItem {
    product_id: ProductId,
    quantity: i32,
    unit_price: Money,
}

impl PurchaseOrderItem {
    /// Fails with `OutOfRange` when `quantity <= 0` or when the line total
    /// does not fit in a `Decimal`.
    pub fn new(product_id: ProductId, quantity: i32, unit_price: Money) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::out_of_range(
                "quantity",
                "quantity must be greater than zero",
            ));
        }

        if unit_price
            .amount()
            .checked_mul(Decimal::from(quantity))
            .is_none()
        {
            return Err(DomainError::out_of_range(
                "unit_price",
                "line total exceeds the representable amount",
            ));
        }

        Ok(Self {
            product_id,
            quantity,
            unit_price,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn unit_price(&self) -> &Money {
        &self.unit_price
    }

    /// Unit price times quantity, in the unit price's currency.
    pub fn calculate_item_total(&self) -> Money {
        // Overflow ruled out in `new`.
        let amount = self.unit_price.amount() * Decimal::from(self.quantity);
        Money::from_parts(amount, self.unit_price.currency().clone())
    }
}
