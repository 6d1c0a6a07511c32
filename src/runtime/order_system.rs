use crate::kitchen;
use crate::model::{Order, Receipt};
use crate::runtime::{OrderError, Rejected};
use tracing::{debug, error, info, instrument, warn};

/// The orchestrator of the order workflow.
///
/// `OrderSystem` is responsible for:
/// - **Validation**: Rejecting orders without an id or without details
/// - **Registration**: Appending accepted orders to its registry
/// - **Receipts**: Issuing a [`Receipt`] numbered after the registry size
/// - **Kitchen dispatch**: Sending accepted orders to [`kitchen::prepare`]
///
/// # Example
///
/// ```
/// use order_desk::model::{Order, OrderStatus};
/// use order_desk::runtime::OrderSystem;
///
/// let mut system = OrderSystem::new();
/// let receipt = system
///     .try_process_order(Order::standard(101, "Burger", "Delivery"))
///     .expect("valid order");
///
/// assert_eq!(receipt.id(), 1);
/// assert_eq!(system.order(101).map(Order::status), Some(OrderStatus::Prepared));
/// ```
#[derive(Debug, Default)]
pub struct OrderSystem {
    /// Accepted orders, in registration order. Append-only.
    orders: Vec<Order>,
}

impl OrderSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a system whose registry can hold `capacity` orders without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: Vec::with_capacity(capacity),
        }
    }

    /// Checks that the order has a non-zero id and non-empty details.
    pub fn validate(&self, order: &Order) -> bool {
        Self::check(order).is_ok()
    }

    fn check(order: &Order) -> Result<(), OrderError> {
        let reason = if order.id() == 0 {
            "missing order id"
        } else if order.details().is_empty() {
            "missing order details"
        } else {
            return Ok(());
        };

        warn!(order_id = order.id(), reason, "Error: invalid order data");
        Err(OrderError::InvalidOrder(reason.to_string()))
    }

    /// Validates, registers and prepares `order`, returning its receipt.
    ///
    /// A rejected order leaves the registry untouched and comes back inside
    /// [`Rejected`], still `Pending`.
    pub fn try_process_order(&mut self, order: Order) -> Result<Receipt, Rejected> {
        debug!(?order, "try_process_order called");
        if let Err(error) = Self::check(&order) {
            return Err(Rejected::new(error, order));
        }

        let order_id = order.id();
        let index = self.orders.len();
        self.orders.push(order);

        let receipt =
            Receipt::new(self.orders.len(), format!("Order #{} registered", order_id)).generate();

        kitchen::prepare(&mut self.orders[index]);

        info!(
            order_id,
            receipt_id = receipt.id(),
            size = self.orders.len(),
            "Order #{} processed successfully.",
            order_id
        );
        Ok(receipt)
    }

    /// Processes `order` without reporting failure to the caller.
    ///
    /// Errors from [`try_process_order`](Self::try_process_order) are logged
    /// and dropped here. An order that was not accepted is handed back as is,
    /// so the caller still owns it.
    #[instrument(skip_all)]
    pub fn process_order(&mut self, order: Order) -> Option<Order> {
        match self.try_process_order(order) {
            Ok(receipt) => {
                debug!(receipt_id = receipt.id(), "Order registered");
                None
            }
            Err(rejected) => {
                error!(error = %rejected.error, "Error processing order: {}", rejected.error);
                Some(rejected.into_order())
            }
        }
    }

    /// Registered orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// First registered order with `id`.
    pub fn order(&self, id: u64) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
