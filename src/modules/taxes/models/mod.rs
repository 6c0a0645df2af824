mod tax;

pub use tax::{normalize_tax_class, TaxRate, STANDARD_TAX_CLASS};
