use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the totals table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalRow {
    /// Stable identifier, e.g. "cart_subtotal", "order_total", "refund_0"
    pub key: String,
    pub label: String,
    pub value: String,
}

impl TotalRow {
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered totals table, computed per render and never stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivedTotals {
    pub rows: Vec<TotalRow>,
}

impl DerivedTotals {
    pub fn new(rows: Vec<TotalRow>) -> Self {
        Self { rows }
    }

    pub fn get(&self, key: &str) -> Option<&TotalRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut TotalRow> {
        self.rows.iter_mut().find(|row| row.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TotalRow> {
        self.rows.iter()
    }
}

/// Label and formatted value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

/// Shipping cost row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRow {
    pub label: String,
    pub value: String,
    pub tax: String,
}

/// Discount row; only produced for non-zero discounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountRow {
    pub label: String,
    pub value: String,
    pub raw_value: Decimal,
}

/// Fee row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRow {
    pub id: i64,
    pub label: String,
    pub value: String,
    pub line_total: String,
    pub line_tax: String,
}

/// Tax breakdown row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRow {
    pub id: i64,
    pub label: String,
    /// Item and shipping tax, formatted
    pub value: String,
    pub rate_id: i64,
    pub tax_amount: Decimal,
    pub shipping_tax_amount: Decimal,
    /// Registry percentage, empty when the rate is unknown
    pub rate: String,
}

/// Which discount figure to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountScope {
    /// Pre-tax discount (older platform generations)
    Cart,
    /// Post-tax discount (older platform generations)
    Order,
    /// All discounts across the order
    #[default]
    Total,
}

impl std::str::FromStr for DiscountScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cart" => Ok(DiscountScope::Cart),
            "order" => Ok(DiscountScope::Order),
            "total" => Ok(DiscountScope::Total),
            _ => Err(format!("Invalid discount scope: {}", s)),
        }
    }
}
