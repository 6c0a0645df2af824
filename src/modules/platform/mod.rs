// Upstream platform generations.
//
// Order data is shaped differently depending on which generation of the
// order-management platform produced it. Document code only talks to the
// `PlatformApi` trait; each generation gets one adapter.

pub mod current;
pub mod legacy;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::{DocumentSettings, TaxMode, TaxTotalDisplay};
use crate::modules::documents::models::TotalRow;
use crate::modules::orders::models::{sanitize_title, LineItem, Order};

pub use current::CurrentPlatform;
pub use legacy::LegacyPlatform;

/// Capabilities the document code needs from the platform
pub trait PlatformApi: Send + Sync {
    /// Adapter name
    fn name(&self) -> &str;

    /// Grand total of the order
    fn order_total(&self, order: &Order) -> Decimal {
        order.total
    }

    /// Total discount across the order
    fn total_discount(&self, order: &Order, ex_tax: bool) -> Decimal;

    /// Line subtotal, optionally with its subtotal tax
    fn line_subtotal(&self, item: &LineItem, include_tax: bool) -> Decimal {
        if include_tax {
            item.subtotal + item.subtotal_tax
        } else {
            item.subtotal
        }
    }

    /// Order subtotal as shown in the totals table
    fn subtotal_to_display(&self, order: &Order, tax: TaxMode) -> Decimal {
        match tax {
            TaxMode::Excl => order.subtotal,
            TaxMode::Incl => order.subtotal + order.subtotal_tax(),
        }
    }

    /// Reason recorded on a refund
    fn refund_reason(&self, order: &Order) -> Option<String>;

    /// Whether line items carry per-rate tax breakdowns
    fn supports_line_tax_data(&self) -> bool;

    /// Whether the tax rate registry can be queried by class
    fn supports_rate_lookup(&self) -> bool {
        true
    }

    /// Template for the inclusive-tax note; `{}` receives the tax list
    fn inclusive_tax_template(&self) -> &str;

    /// Totals table as the platform renders it, labels ending in a colon
    fn order_item_totals(&self, order: &Order, settings: &DocumentSettings) -> Vec<TotalRow> {
        default_order_item_totals(self, order, settings)
    }
}

/// Known platform generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformGeneration {
    #[default]
    Current,
    Legacy,
}

impl PlatformGeneration {
    /// Adapter for this generation
    pub fn adapter(&self) -> Arc<dyn PlatformApi> {
        match self {
            PlatformGeneration::Current => Arc::new(CurrentPlatform),
            PlatformGeneration::Legacy => Arc::new(LegacyPlatform),
        }
    }
}

impl fmt::Display for PlatformGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformGeneration::Current => write!(f, "current"),
            PlatformGeneration::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for PlatformGeneration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "current" | "3" => Ok(PlatformGeneration::Current),
            "legacy" | "2" => Ok(PlatformGeneration::Legacy),
            _ => Err(format!("Invalid platform generation: {}", s)),
        }
    }
}

/// Builds the platform totals table shared by all generations
fn default_order_item_totals<P: PlatformApi + ?Sized>(
    platform: &P,
    order: &Order,
    settings: &DocumentSettings,
) -> Vec<TotalRow> {
    let display = settings.tax_display;
    let price = |amount: Decimal| settings.format_price(amount, &order.currency);
    let mut rows = Vec::new();

    rows.push(TotalRow::new(
        "cart_subtotal",
        "Subtotal:",
        price(platform.subtotal_to_display(order, display)),
    ));

    let discount = platform.total_discount(order, !display.includes_tax());
    if discount > Decimal::ZERO {
        rows.push(TotalRow::new("discount", "Discount:", format!("-{}", price(discount))));
    }

    if !order.shipping_method.is_empty() || !order.shipping_total.is_zero() {
        let shipping = if display.includes_tax() {
            order.shipping_total + order.shipping_tax
        } else {
            order.shipping_total
        };
        let mut value = price(shipping);
        if !order.shipping_method.is_empty() {
            value.push_str(&format!(" via {}", order.shipping_method));
        }
        rows.push(TotalRow::new("shipping", "Shipping:", value));
    }

    for fee in &order.fees {
        let amount = if display.includes_tax() {
            fee.total + fee.tax
        } else {
            fee.total
        };
        rows.push(TotalRow::new(
            format!("fee_{}", fee.id),
            format!("{}:", fee.name),
            price(amount),
        ));
    }

    if settings.tax_enabled && !display.includes_tax() {
        match settings.tax_total_display {
            TaxTotalDisplay::Itemized => {
                for tax in &order.tax_lines {
                    let key = if tax.rate_code.is_empty() {
                        format!("tax_{}", tax.rate_id)
                    } else {
                        sanitize_title(&tax.rate_code)
                    };
                    rows.push(TotalRow::new(key, format!("{}:", tax.label), price(tax.amount())));
                }
            }
            TaxTotalDisplay::Single => {
                rows.push(TotalRow::new(
                    "tax",
                    format!("{}:", settings.tax_label),
                    price(order.total_tax),
                ));
            }
        }
    }

    let total = platform.order_total(order);
    if !total.is_zero() && !order.payment_method_title.is_empty() {
        rows.push(TotalRow::new(
            "payment_method",
            "Payment method:",
            order.payment_method_title.clone(),
        ));
    }

    rows.push(TotalRow::new("order_total", "Total:", price(total)));

    for (index, refund) in order.refunds.iter().enumerate() {
        rows.push(TotalRow::new(
            format!("refund_{}", index),
            "Refund:",
            format!("-{}", price(refund.amount)),
        ));
    }

    rows
}
