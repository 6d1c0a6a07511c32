//! Orders and their status.
//!
//! Shared fields (`id`, `details`, `status`) live on [`Order`]; the variant
//! specific payload lives in [`OrderKind`].
//!
//! See [`OrderSystem`](crate::runtime::OrderSystem) for how orders are
//! validated, registered and sent to the [`kitchen`](crate::kitchen).

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{debug, info};

/// Lifecycle of an order. `Pending` until the kitchen prepares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Prepared,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Prepared => write!(f, "Prepared"),
        }
    }
}

/// Variant payload of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    /// No delivery information attached.
    Plain,
    /// Express order with an estimated delivery time.
    Express { delivery_minutes: u32 },
    /// Standard order with a free-form shipping type ("Delivery", "Pickup", ...).
    Standard { shipping_type: String },
}

/// A customer's food order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: u64,
    details: String,
    status: OrderStatus,
    kind: OrderKind,
}

impl Order {
    /// Creates a plain order with status `Pending`.
    ///
    /// # Arguments
    /// * `id` - Caller supplied identifier (zero is rejected at validation)
    /// * `details` - What was ordered (empty is rejected at validation)
    pub fn new(id: u64, details: impl Into<String>) -> Self {
        Self::with_kind(id, details, OrderKind::Plain)
    }

    /// Creates an express order.
    pub fn express(id: u64, details: impl Into<String>, delivery_minutes: u32) -> Self {
        Self::with_kind(id, details, OrderKind::Express { delivery_minutes })
    }

    /// Creates a standard order.
    pub fn standard(id: u64, details: impl Into<String>, shipping_type: impl Into<String>) -> Self {
        Self::with_kind(
            id,
            details,
            OrderKind::Standard {
                shipping_type: shipping_type.into(),
            },
        )
    }

    fn with_kind(id: u64, details: impl Into<String>, kind: OrderKind) -> Self {
        Self {
            id,
            details: details.into(),
            status: OrderStatus::Pending,
            kind,
        }
    }

    /// Announces the order and hands it back, so it can be chained into
    /// [`Customer::place_order`](crate::model::Customer::place_order).
    pub fn create(self) -> Self {
        info!(order_id = self.id, "Order created: {} - {}", self.id, self.details);
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn kind(&self) -> &OrderKind {
        &self.kind
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Overwrites the status. No transition checks.
    pub fn set_status(&mut self, status: OrderStatus) {
        debug!(order_id = self.id, from = %self.status, to = %status, "set_status");
        self.status = status;
    }

    pub fn delivery_minutes(&self) -> Option<u32> {
        match self.kind {
            OrderKind::Express { delivery_minutes } => Some(delivery_minutes),
            _ => None,
        }
    }

    pub fn shipping_type(&self) -> Option<&str> {
        match &self.kind {
            OrderKind::Standard { shipping_type } => Some(shipping_type),
            _ => None,
        }
    }

    /// Prints the delivery time of an express order.
    ///
    /// Returns `false` (and prints nothing) for other kinds.
    pub fn show_delivery(&self) -> bool {
        match self.delivery_minutes() {
            Some(minutes) => {
                info!(order_id = self.id, "Express order: delivery time {} minutes", minutes);
                true
            }
            None => {
                debug!(order_id = self.id, kind = ?self.kind, "show_delivery on non-express order");
                false
            }
        }
    }

    /// Prints the shipping type of a standard order.
    ///
    /// Returns `false` (and prints nothing) for other kinds.
    pub fn show_shipping(&self) -> bool {
        match self.shipping_type() {
            Some(shipping_type) => {
                info!(order_id = self.id, "Standard order: shipping type {}", shipping_type);
                true
            }
            None => {
                debug!(
                    order_id = self.id,
                    kind = ?self.kind,
                    "show_shipping on non-standard order"
                );
                false
            }
        }
    }
}
