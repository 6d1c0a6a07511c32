//! # Order Desk
//!
//! > **A small, synchronous order-processing workflow.**
//!
//! A customer places an order, the system validates and registers it, a
//! receipt is issued and the kitchen marks the order prepared.
//!
//! ## 🏗️ Design
//!
//! ### Orders as a sum type
//! Every [`Order`](model::Order) shares an id, details and a status. What makes
//! an order *express* or *standard* lives in [`OrderKind`](model::OrderKind),
//! so there is one type to store and one set of accessors to call.
//!
//! ### Two ways to submit
//! - [`OrderSystem::try_process_order`](runtime::OrderSystem::try_process_order)
//!   returns `Result<Receipt, Rejected>`; the rejection carries the error and
//!   the untouched order.
//! - [`OrderSystem::process_order`](runtime::OrderSystem::process_order) calls it,
//!   logs a rejection and only hands the order back. This is what
//!   [`Customer::place_order`](model::Customer::place_order) uses.
//!
//! ### Observability
//! Every notice is a `tracing` event. See [`runtime::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - [`Order`](model::Order), [`Receipt`](model::Receipt),
//!   [`Customer`](model::Customer).
//! - [`kitchen`] - [`prepare`](kitchen::prepare), the only status transition.
//! - [`runtime`] - [`OrderSystem`](runtime::OrderSystem), [`OrderError`](runtime::OrderError),
//!   [`Rejected`](runtime::Rejected), tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod kitchen;
pub mod model;
pub mod runtime;
