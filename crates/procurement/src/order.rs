use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use acme_core::{AggregateRoot, Currency, DomainError, DomainResult, Entity, Money};
use acme_scm::SupplierId;

use crate::item::PurchaseOrderItem;
use crate::product_id::ProductId;

/// Aggregate root: PurchaseOrder.
///
/// A purchase order placed with a supplier. Items can only be appended
/// through [`PurchaseOrder::add_item`], which prices every line in the
/// order's own currency; there is no removal and no status lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrder {
    order_number: String,
    supplier_id: SupplierId,
    order_date: DateTime<Utc>,
    currency: Currency,
    items: Vec<PurchaseOrderItem>,
    /// Running sum of item totals, kept in step with `items`.
    #[serde(skip)]
    total: Decimal,
}

impl PurchaseOrder {
    /// Open a new, empty purchase order.
    ///
    /// Fails with `InvalidArgument` when `order_number` is blank or `currency`
    /// is not a 3-letter code. `order_date` is taken as-is.
    pub fn new(
        order_number: impl Into<String>,
        supplier_id: SupplierId,
        order_date: DateTime<Utc>,
        currency: &str,
    ) -> DomainResult<Self> {
        let order_number = order_number.into();
        if order_number.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "order_number",
                "order number cannot be empty",
            ));
        }
        let currency = Currency::new(currency)?;

        Ok(Self {
            order_number,
            supplier_id,
            order_date,
            currency,
            items: Vec::new(),
            total: Decimal::ZERO,
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

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn items(&self) -> &[PurchaseOrderItem] {
        &self.items
    }

    /// Append a line priced in the order's currency.
    ///
    /// Fails with `OutOfRange` when `quantity` or `unit_price_amount` is not
    /// positive, or when the line or order total would overflow. On failure
    /// the order is left unchanged.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i32,
        unit_price_amount: Decimal,
    ) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::out_of_range(
                "quantity",
                "quantity must be greater than zero",
            ));
        }
        if unit_price_amount <= Decimal::ZERO {
            return Err(DomainError::out_of_range(
                "unit_price_amount",
                "unit price must be greater than zero",
            ));
        }

        let unit_price = Money::from_parts(unit_price_amount, self.currency.clone());
        let item = PurchaseOrderItem::new(product_id, quantity, unit_price)?;

        let Some(total) = self.total.checked_add(item.calculate_item_total().amount()) else {
            return Err(DomainError::out_of_range(
                "unit_price_amount",
                "order total exceeds the representable amount",
            ));
        };

        self.items.push(item);
        self.total = total;

        tracing::debug!(
            order_number = %self.order_number,
            line_no = self.items.len(),
            product_id = %product_id,
            quantity,
            unit_price = %unit_price_amount,
            "purchase order item added"
        );

        Ok(())
    }

    /// Sum of all item totals in the order's currency (zero when empty).
    pub fn calculate_order_total(&self) -> Money {
        Money::from_parts(self.total, self.currency.clone())
    }
}

impl Entity for PurchaseOrder {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.order_number
    }
}

impl AggregateRoot for PurchaseOrder {}
