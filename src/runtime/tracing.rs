//! # Observability & Tracing
//!
//! Every notice of the order workflow is a `tracing` event. The message is the
//! human-readable line; structured fields (`order_id`, `receipt_id`, `size`)
//! ride along for filtering.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Workflow notices (default)
//! cargo run
//!
//! # Full payloads and status changes
//! RUST_LOG=debug cargo run
//!
//! # Only rejections
//! RUST_LOG=warn cargo run
//! ```
//!
//! With `RUST_LOG=debug`, [`try_process_order`](crate::runtime::OrderSystem::try_process_order)
//! logs the whole order once at entry:
//!
//! ```text
//! DEBUG place_order:process_order: try_process_order called order=Order { id: 101, ... }
//! ```
//!
//! **With the default filter** the demo reads:
//!
//! ```text
//! INFO Order created: 101 - Burger and fries order_id=101
//! INFO Standard order: shipping type Delivery order_id=101
//! INFO place_order: Juan Perez places an order... customer_id=1 order_id=101
//! INFO place_order:process_order: Receipt #1: Order #101 registered - Date: ... receipt_id=1
//! INFO place_order:process_order: Preparing food for order #101 order_id=101
//! INFO place_order:process_order: Order #101 processed successfully. order_id=101 ...
//! ```
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false) // Module paths add nothing for a single crate
        .compact() // Shows spans inline (e.g., "place_order:process_order")
        .init();
}
