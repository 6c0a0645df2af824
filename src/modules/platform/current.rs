use rust_decimal::Decimal;

use super::PlatformApi;
use crate::modules::orders::models::Order;

/// Current platform generation
///
/// Discounts are stored on the order, line items carry per-rate tax data and
/// refunds keep their own reason field.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentPlatform;

impl PlatformApi for CurrentPlatform {
    fn name(&self) -> &str {
        "current"
    }

    fn total_discount(&self, order: &Order, ex_tax: bool) -> Decimal {
        if ex_tax {
            order.discount_total
        } else {
            order.discount_total + order.discount_tax
        }
    }

    fn refund_reason(&self, order: &Order) -> Option<String> {
        order
            .refund_reason
            .clone()
            .filter(|reason| !reason.trim().is_empty())
    }

    fn supports_line_tax_data(&self) -> bool {
        true
    }

    fn inclusive_tax_template(&self) -> &str {
        "(includes {})"
    }
}
