use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::order_document::OrderDocument;
use crate::config::{TaxMode, TaxTotalDisplay};
use crate::modules::documents::models::{
    DerivedTotals, DiscountRow, DiscountScope, FeeRow, LabeledValue, ShippingRow, TaxRow,
};

const REFUND_KEY_MARKER: &str = "refund_";

impl OrderDocument {
    /// Totals table exactly as the platform renders it
    pub fn raw_totals(&self) -> DerivedTotals {
        DerivedTotals::new(self.platform.order_item_totals(&self.order, &self.settings))
    }

    /// Totals table cleaned up for documents
    ///
    /// Labels lose their trailing colon. For regular orders the grand total is
    /// rewritten with the inclusive-tax note and refund rows are dropped;
    /// refund documents keep their rows untouched.
    pub fn aggregate_totals(&self) -> DerivedTotals {
        let mut totals = self.raw_totals();

        for row in &mut totals.rows {
            if let Some(pos) = row.label.rfind(':') {
                row.label.replace_range(pos..pos + 1, "");
            }
        }

        if !self.is_refund() {
            let grand_total = self.grand_total_with_tax_note();
            if let Some(row) = totals.get_mut("order_total") {
                row.value = grand_total;
            }

            let before = totals.len();
            totals.rows.retain(|row| !row.key.contains(REFUND_KEY_MARKER));
            debug!(
                order_id = self.order.id,
                removed = before - totals.len(),
                "Refund rows removed from totals"
            );
        }

        self.hooks.totals.apply(totals, &self.order)
    }

    fn grand_total_with_tax_note(&self) -> String {
        let mut value = self.format_price(self.platform.order_total(&self.order));

        if !self.settings.tax_enabled || !self.settings.tax_display.includes_tax() {
            return value;
        }

        let parts: Vec<String> = match self.settings.tax_total_display {
            TaxTotalDisplay::Itemized => self
                .order
                .tax_lines
                .iter()
                .map(|tax| format!("{} {}", self.format_price(tax.amount()), tax.label))
                .collect(),
            TaxTotalDisplay::Single => {
                let tax = self.order.total_tax - self.order.total_tax_refunded;
                vec![format!("{} {}", self.format_price(tax), self.settings.tax_label)]
            }
        };

        if !parts.is_empty() {
            let note = self
                .platform
                .inclusive_tax_template()
                .replacen("{}", &parts.join(", "), 1);
            value.push(' ');
            value.push_str(&note);
        }
        value
    }

    pub fn subtotal(&self, tax: TaxMode) -> LabeledValue {
        LabeledValue {
            label: "Subtotal".to_string(),
            value: self.format_price(self.platform.subtotal_to_display(&self.order, tax)),
        }
    }

    pub fn shipping(&self, tax: TaxMode) -> ShippingRow {
        let cost = match tax {
            TaxMode::Excl => self.order.shipping_total,
            TaxMode::Incl => self.order.shipping_total + self.order.shipping_tax,
        };

        ShippingRow {
            label: "Shipping".to_string(),
            value: self.format_price(cost),
            tax: self.format_price(self.order.shipping_tax),
        }
    }

    /// Discount for the requested scope; `None` when it rounds to zero
    ///
    /// Exclusive figures ignore the scope and always report the total
    /// discount without tax.
    pub fn discount(&self, scope: DiscountScope, tax: TaxMode) -> Option<DiscountRow> {
        let raw_value = match tax {
            TaxMode::Incl => match scope {
                DiscountScope::Cart => self.order.cart_discount,
                DiscountScope::Order => self.order.order_discount,
                DiscountScope::Total => self.platform.total_discount(&self.order, false),
            },
            TaxMode::Excl => self.platform.total_discount(&self.order, true),
        };

        let row = if raw_value
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
            .is_zero()
        {
            None
        } else {
            Some(DiscountRow {
                label: "Discount".to_string(),
                value: self.format_price(raw_value),
                raw_value,
            })
        };

        self.hooks.discount.apply(row, &self.order)
    }

    pub fn fees(&self, tax: TaxMode) -> Option<Vec<FeeRow>> {
        if self.order.fees.is_empty() {
            return None;
        }

        let rows = self
            .order
            .fees
            .iter()
            .map(|fee| {
                let amount = match tax {
                    TaxMode::Excl => fee.total,
                    TaxMode::Incl => fee.total + fee.tax,
                };
                FeeRow {
                    id: fee.id,
                    label: fee.name.clone(),
                    value: self.format_price(amount),
                    line_total: self.format_price(fee.total),
                    line_tax: self.format_price(fee.tax),
                }
            })
            .collect();

        Some(rows)
    }

    /// Tax breakdown with registry percentages
    pub async fn taxes(&self) -> Option<Vec<TaxRow>> {
        if self.order.tax_lines.is_empty() {
            return None;
        }

        let mut rows = Vec::with_capacity(self.order.tax_lines.len());
        for tax in &self.order.tax_lines {
            rows.push(TaxRow {
                id: tax.id,
                label: tax.label.clone(),
                value: self.format_price(tax.amount()),
                rate_id: tax.rate_id,
                tax_amount: tax.tax_total,
                shipping_tax_amount: tax.shipping_tax_total,
                rate: self.tax_rates.rate_label_for_id(tax.rate_id).await,
            });
        }

        Some(rows)
    }

    pub fn grand_total(&self, tax: TaxMode) -> LabeledValue {
        let total = self.platform.order_total(&self.order);

        let grand_total = match tax {
            TaxMode::Excl => LabeledValue {
                label: "Total ex. tax".to_string(),
                value: self.format_price(total - self.order.total_tax),
            },
            TaxMode::Incl => LabeledValue {
                label: "Total".to_string(),
                value: self.format_price(total),
            },
        };

        self.hooks.grand_total.apply(grand_total, &self.order)
    }

    /// Unformatted discount, zero when none was granted
    pub fn discount_amount(&self, tax: TaxMode) -> Decimal {
        self.discount(DiscountScope::Total, tax)
            .map(|row| row.raw_value)
            .unwrap_or(Decimal::ZERO)
    }
}
