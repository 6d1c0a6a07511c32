//! # Kitchen
//!
//! Stateless helper that prepares registered orders. There is no kitchen
//! instance: [`prepare`] is a free function.

use crate::model::{Order, OrderStatus};
use tracing::info;

/// Prepares the food for `order` and marks it [`OrderStatus::Prepared`].
pub fn prepare(order: &mut Order) {
    info!(order_id = order.id(), "Preparing food for order #{}", order.id());
    order.set_status(OrderStatus::Prepared);
}
