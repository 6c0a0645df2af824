pub mod tax_rate_resolver;

pub use tax_rate_resolver::{format_rate, TaxRateResolver, NOT_APPLICABLE};
