use rust_decimal::Decimal;

use super::PlatformApi;
use crate::modules::orders::models::Order;

/// Legacy platform generation
///
/// No stored total discount: it is recomputed from line items. Per-rate
/// line tax data is not trusted, and refunds keep their reason in the
/// customer note.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyPlatform;

impl PlatformApi for LegacyPlatform {
    fn name(&self) -> &str {
        "legacy"
    }

    fn total_discount(&self, order: &Order, ex_tax: bool) -> Decimal {
        order.items.iter().map(|item| item.discount(!ex_tax)).sum()
    }

    fn refund_reason(&self, order: &Order) -> Option<String> {
        order
            .refund_reason
            .clone()
            .or_else(|| order.customer_note.clone())
            .filter(|reason| !reason.trim().is_empty())
    }

    fn supports_line_tax_data(&self) -> bool {
        false
    }

    fn inclusive_tax_template(&self) -> &str {
        "(Includes {})"
    }
}
