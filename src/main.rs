//! Demo: one customer submits a standard and an express order, then the final
//! statuses are printed.

use order_desk::model::{Customer, Order};
use order_desk::runtime::{setup_tracing, OrderSystem};
use tracing::info;

fn main() -> Result<(), String> {
    setup_tracing();

    let mut system = OrderSystem::new();
    let customer = Customer::new("Juan Perez", 1);

    // Orders the system turned down come back here
    let mut returned = Vec::new();

    let standard = Order::standard(101, "Burger and fries", "Delivery").create();
    standard.show_shipping();
    returned.extend(customer.place_order(&mut system, standard));

    let express = Order::express(102, "Family pizza", 30).create();
    express.show_delivery();
    returned.extend(customer.place_order(&mut system, express));

    for id in [101, 102] {
        let order = system
            .order(id)
            .or_else(|| returned.iter().find(|order| order.id() == id))
            .ok_or_else(|| format!("Order {} went missing", id))?;
        let status = order.status();
        info!(order_id = id, %status, "Status of order {}: {}", id, status);
    }

    Ok(())
}
