//! Error types for order processing.

use crate::model::Order;
use thiserror::Error;

/// Errors that can occur while processing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order is missing its id or its details.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

/// An order the system refused, handed back untouched with the reason.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{error}")]
pub struct Rejected {
    pub error: OrderError,
    order: Order,
}

impl Rejected {
    pub fn new(error: OrderError, order: Order) -> Self {
        Self { error, order }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn into_order(self) -> Order {
        self.order
    }
}
