//! Runtime orchestration.
//!
//! This module contains:
//!
//! - [`OrderSystem`] - Validates, registers and prepares orders
//! - [`OrderError`] - The error returned for rejected orders
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod error;
pub mod order_system;
pub mod tracing;

pub use error::*;
pub use order_system::*;
pub use self::tracing::*;
