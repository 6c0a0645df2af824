// Order snapshot handed to document code by the order-management system.
//
// Refunds are orders of kind `Refund` pointing at their parent. They carry
// their own amounts and reason but defer customer-facing fields (addresses,
// payment method, dates, numbers) to the parent.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::address::Address;
use super::line_item::LineItem;
use crate::core::Currency;

/// Order record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    #[default]
    Standard,
    Refund,
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderKind::Standard => write!(f, "standard"),
            OrderKind::Refund => write!(f, "refund"),
        }
    }
}

/// Fee line (gift wrap, payment surcharge, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeLine {
    pub id: i64,
    pub name: String,
    pub total: Decimal,
    #[serde(default)]
    pub tax: Decimal,
}

/// Tax total recorded on the order for one rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTaxLine {
    pub id: i64,
    pub rate_id: i64,
    /// Rate code, e.g. "US-CA-STATE TAX-1"
    #[serde(default)]
    pub rate_code: String,
    pub label: String,
    pub tax_total: Decimal,
    #[serde(default)]
    pub shipping_tax_total: Decimal,
}

impl OrderTaxLine {
    /// Item and shipping tax together
    pub fn amount(&self) -> Decimal {
        self.tax_total + self.shipping_tax_total
    }
}

/// Refund issued against this order, as listed in its totals table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundSummary {
    pub id: i64,
    /// Refunded amount, positive
    pub amount: Decimal,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Comment left on the order by staff or the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNote {
    pub id: i64,
    pub content: String,
    /// Visible to the customer
    #[serde(default)]
    pub customer_note: bool,
    pub created_at: DateTime<Utc>,
}

/// Invoice number assigned to the order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub number: u64,
    pub formatted_number: String,
    pub date: DateTime<Utc>,
}

/// Represents an order or refund record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,

    /// Customer-facing number; may carry a leading `#`
    #[serde(default)]
    pub order_number: String,

    #[serde(default)]
    pub kind: OrderKind,

    /// Parent order, present on refunds only
    #[serde(default)]
    pub parent_id: Option<i64>,

    pub currency: Currency,

    #[serde(default)]
    pub billing: Address,

    #[serde(default)]
    pub shipping: Address,

    /// Sum of line subtotals, excluding tax
    #[serde(default)]
    pub subtotal: Decimal,

    #[serde(default)]
    pub shipping_total: Decimal,

    #[serde(default)]
    pub shipping_tax: Decimal,

    #[serde(default)]
    pub discount_total: Decimal,

    #[serde(default)]
    pub discount_tax: Decimal,

    /// Pre-tax discount kept by older platform generations
    #[serde(default)]
    pub cart_discount: Decimal,

    /// Post-tax discount kept by older platform generations
    #[serde(default)]
    pub order_discount: Decimal,

    #[serde(default)]
    pub total_tax: Decimal,

    /// Grand total, tax included
    pub total: Decimal,

    #[serde(default)]
    pub total_tax_refunded: Decimal,

    #[serde(default)]
    pub items: Vec<LineItem>,

    #[serde(default)]
    pub fees: Vec<FeeLine>,

    #[serde(default)]
    pub tax_lines: Vec<OrderTaxLine>,

    #[serde(default)]
    pub refunds: Vec<RefundSummary>,

    #[serde(default)]
    pub notes: Vec<OrderNote>,

    #[serde(default)]
    pub customer_note: Option<String>,

    /// Reason given when the refund was issued
    #[serde(default)]
    pub refund_reason: Option<String>,

    #[serde(default)]
    pub payment_method_title: String,

    #[serde(default)]
    pub shipping_method: String,

    /// Custom fields
    #[serde(default)]
    pub meta: BTreeMap<String, String>,

    #[serde(default)]
    pub invoice: Option<InvoiceRecord>,

    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create an empty standard order
    pub fn new(id: i64, currency: Currency, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            order_number: id.to_string(),
            kind: OrderKind::Standard,
            parent_id: None,
            currency,
            billing: Address::default(),
            shipping: Address::default(),
            subtotal: Decimal::ZERO,
            shipping_total: Decimal::ZERO,
            shipping_tax: Decimal::ZERO,
            discount_total: Decimal::ZERO,
            discount_tax: Decimal::ZERO,
            cart_discount: Decimal::ZERO,
            order_discount: Decimal::ZERO,
            total_tax: Decimal::ZERO,
            total: Decimal::ZERO,
            total_tax_refunded: Decimal::ZERO,
            items: Vec::new(),
            fees: Vec::new(),
            tax_lines: Vec::new(),
            refunds: Vec::new(),
            notes: Vec::new(),
            customer_note: None,
            refund_reason: None,
            payment_method_title: String::new(),
            shipping_method: String::new(),
            meta: BTreeMap::new(),
            invoice: None,
            created_at,
        }
    }

    /// Create an empty refund against `parent_id`
    pub fn refund(id: i64, parent_id: i64, currency: Currency, created_at: DateTime<Utc>) -> Self {
        let mut refund = Self::new(id, currency, created_at);
        refund.kind = OrderKind::Refund;
        refund.parent_id = Some(parent_id);
        refund
    }

    pub fn is_refund(&self) -> bool {
        self.kind == OrderKind::Refund
    }

    /// Custom field value, `None` when unset or blank
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Sum of line subtotal taxes
    pub fn subtotal_tax(&self) -> Decimal {
        self.items.iter().map(|item| item.subtotal_tax).sum()
    }
}
