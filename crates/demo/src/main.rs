use acme_core::Entity;
use acme_procurement::{ProductId, PurchaseOrder};
use acme_scm::{Address, Supplier};
use chrono::Utc;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    acme_observability::init();

    let supplier_address = Address::new("123 Main St", "Apt 4B", "Anytown", "CA", "12345", "USA")?;
    let supplier = Supplier::new("SUP123", "Best Supplies Inc.", supplier_address)?;
    tracing::info!(supplier_id = %supplier.id(), address = %supplier.address(), "supplier ready");

    let mut purchase_order = PurchaseOrder::new("PO12345", supplier.id().clone(), Utc::now(), "USD")?;

    purchase_order.add_item(ProductId::new_id(), 10, Decimal::new(1500, 2))?;
    purchase_order.add_item(ProductId::new_id(), 5, Decimal::new(2500, 2))?;

    let total = purchase_order.calculate_order_total();
    tracing::info!(
        order_number = purchase_order.order_number(),
        items = purchase_order.items().len(),
        total = %total,
        "purchase order priced"
    );
    println!("order total: {total}");

    Ok(())
}
