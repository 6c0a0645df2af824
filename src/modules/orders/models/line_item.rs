// Ordered product row as snapshotted by the order-management system.
//
// Subtotals are pre-discount, totals are post-discount. Refund rows carry
// negative amounts and quantities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::product::Product;

/// Per-rate tax amounts of one line, keyed by tax rate id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineTaxBreakdown {
    /// Tax on the pre-discount subtotal
    pub subtotal: BTreeMap<i64, Decimal>,
    /// Tax on the post-discount total
    pub total: BTreeMap<i64, Decimal>,
}

impl LineTaxBreakdown {
    pub fn is_empty(&self) -> bool {
        self.subtotal.is_empty() && self.total.is_empty()
    }

    /// Rate ids that actually contributed tax to the subtotal
    pub fn contributing_rate_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.subtotal
            .iter()
            .filter(|(_, amount)| !amount.is_zero())
            .map(|(rate_id, _)| *rate_id)
    }
}

/// Display metadata attached to a line (variation attributes, add-ons)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta {
    pub key: String,
    pub value: String,
}

/// Represents a single ordered product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,

    pub product_id: i64,

    #[serde(default)]
    pub variation_id: Option<i64>,

    pub name: String,

    pub quantity: i32,

    /// Pre-discount line amount
    pub subtotal: Decimal,

    #[serde(default)]
    pub subtotal_tax: Decimal,

    /// Post-discount line amount
    pub total: Decimal,

    #[serde(default)]
    pub total_tax: Decimal,

    /// Tax class slug, empty for the standard class
    #[serde(default)]
    pub tax_class: String,

    #[serde(default)]
    pub taxes: Option<LineTaxBreakdown>,

    #[serde(default)]
    pub meta: Vec<ItemMeta>,

    #[serde(default)]
    pub product: Option<Product>,
}

impl LineItem {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        quantity: i32,
        subtotal: Decimal,
        total: Decimal,
    ) -> Self {
        Self {
            id,
            product_id: 0,
            variation_id: None,
            name: name.into(),
            quantity,
            subtotal,
            subtotal_tax: Decimal::ZERO,
            total,
            total_tax: Decimal::ZERO,
            tax_class: String::new(),
            taxes: None,
            meta: Vec::new(),
            product: None,
        }
    }

    /// Set both tax amounts, builder style
    pub fn with_tax(mut self, subtotal_tax: Decimal, total_tax: Decimal) -> Self {
        self.subtotal_tax = subtotal_tax;
        self.total_tax = total_tax;
        self
    }

    /// Discount granted on this line
    ///
    /// Exclusive: `subtotal - total`.
    /// Inclusive: `(subtotal + subtotal_tax) - (total + total_tax)`.
    pub fn discount(&self, include_tax: bool) -> Decimal {
        if include_tax {
            (self.subtotal + self.subtotal_tax) - (self.total + self.total_tax)
        } else {
            self.subtotal - self.total
        }
    }

    /// Divisor for per-unit amounts, never below one
    pub fn unit_divisor(&self) -> Decimal {
        Decimal::from(self.quantity.max(1))
    }
}
