use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Display;
use tracing::info;

/// Confirmation issued once an order has been registered.
///
/// The timestamp is taken when the receipt is built, not when it is
/// generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    id: usize,
    timestamp: DateTime<Local>,
    details: String,
}

impl Receipt {
    pub fn new(id: usize, details: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: Local::now(),
            details: details.into(),
        }
    }

    /// Prints the confirmation line and hands the receipt back.
    pub fn generate(self) -> Self {
        info!(receipt_id = self.id, "{}", self);
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Receipt #{}: {} - Date: {}",
            self.id,
            self.details,
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f")
        )
    }
}
