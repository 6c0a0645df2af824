use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax class slug of the standard class
pub const STANDARD_TAX_CLASS: &str = "";

/// Registry entry for one jurisdictional tax rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: i64,
    /// Percentage, e.g. 21.0000 for 21%
    pub rate: Decimal,
    pub label: String,
    /// Tax class slug, empty for the standard class
    #[serde(default)]
    pub tax_class: String,
    #[serde(default)]
    pub country: String,
}

impl TaxRate {
    pub fn new(
        id: i64,
        rate: Decimal,
        label: impl Into<String>,
        tax_class: impl Into<String>,
    ) -> Self {
        Self {
            id,
            rate,
            label: label.into(),
            tax_class: tax_class.into(),
            country: String::new(),
        }
    }

    /// Whether this rate belongs to `tax_class`
    pub fn in_class(&self, tax_class: &str) -> bool {
        normalize_tax_class(&self.tax_class) == normalize_tax_class(tax_class)
    }
}

/// "standard" and the empty slug both name the standard class
pub fn normalize_tax_class(tax_class: &str) -> &str {
    let trimmed = tax_class.trim();
    if trimmed.eq_ignore_ascii_case("standard") {
        STANDARD_TAX_CLASS
    } else {
        trimmed
    }
}
