// Orders module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Address, AddressField, LineItem, Order, OrderKind};
pub use repositories::{InMemoryOrderRepository, OrderRepository};
pub use services::OrderResolver;
