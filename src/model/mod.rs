//! Pure data structures: orders, receipts and customers.

pub mod customer;
pub mod order;
pub mod receipt;

pub use customer::*;
pub use order::*;
pub use receipt::*;
