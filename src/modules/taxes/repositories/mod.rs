pub mod tax_repository;

pub use tax_repository::{InMemoryTaxRateRegistry, TaxRateRegistry};
