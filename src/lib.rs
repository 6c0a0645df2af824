//! Order document formatting library
//!
//! Turns order snapshots from an e-commerce platform into display data for
//! invoices and packing slips: addresses, line items, tax rates, discounts
//! and the totals table. Refund documents read their customer-facing fields
//! from the parent order.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::documents;
pub use modules::orders;
pub use modules::platform;
pub use modules::taxes;
