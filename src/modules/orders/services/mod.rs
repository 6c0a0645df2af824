pub mod order_resolver;

pub use order_resolver::OrderResolver;
