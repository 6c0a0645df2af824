pub mod models;
pub mod repositories;
pub mod services;

pub use models::TaxRate;
pub use repositories::{InMemoryTaxRateRegistry, TaxRateRegistry};
pub use services::TaxRateResolver;
