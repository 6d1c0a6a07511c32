use crate::model::Order;
use crate::runtime::OrderSystem;
use tracing::{info, instrument};

/// A customer placing orders against an [`OrderSystem`].
///
/// The system does not keep track of customers.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    id: u64,
}

impl Customer {
    /// Creates a new Customer.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `id` - Customer identifier
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Hands the order to the system. Rejections are logged by the system;
    /// a rejected order simply comes back to the customer, still `Pending`.
    #[instrument(skip_all, fields(customer_id = self.id, order_id = order.id()))]
    pub fn place_order(&self, system: &mut OrderSystem, order: Order) -> Option<Order> {
        info!("{} places an order...", self.name);
        system.process_order(order)
    }
}
