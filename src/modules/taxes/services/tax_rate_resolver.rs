use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::modules::orders::models::LineTaxBreakdown;
use crate::modules::taxes::repositories::TaxRateRegistry;

/// Shown when no tax rate applies to a line
pub const NOT_APPLICABLE: &str = "-";

const RATE_SEPARATOR: &str = ", ";

/// Render a percentage without trailing zeros, e.g. "21%" or "5.5%"
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

/// Works out the tax rate label printed next to a line item
///
/// Upstream tax data comes in different shapes depending on the platform
/// generation, so resolution is tiered:
/// 1. per-rate breakdown of the line, each rate looked up by id (an id
///    missing from the registry prints as `0%`)
/// 2. untaxed lines get [`NOT_APPLICABLE`]
/// 3. rates configured for the line's tax class, or the effective rate
///    computed from the line amounts when the class has none
#[derive(Clone)]
pub struct TaxRateResolver {
    registry: Arc<dyn TaxRateRegistry>,
    use_breakdowns: bool,
    use_registry_rates: bool,
}

impl TaxRateResolver {
    pub fn new(registry: Arc<dyn TaxRateRegistry>) -> Self {
        Self {
            registry,
            use_breakdowns: true,
            use_registry_rates: true,
        }
    }

    /// Whether per-rate line breakdowns are trusted
    pub fn with_breakdowns(mut self, enabled: bool) -> Self {
        self.use_breakdowns = enabled;
        self
    }

    /// Whether class rates are read from the registry; when off the
    /// effective rate is always computed from the line amounts
    pub fn with_registry_rates(mut self, enabled: bool) -> Self {
        self.use_registry_rates = enabled;
        self
    }

    pub fn registry(&self) -> &Arc<dyn TaxRateRegistry> {
        &self.registry
    }

    /// Tax rate label for one line
    pub async fn tax_rate_for_line(
        &self,
        tax_class: &str,
        line_total: Decimal,
        line_tax: Decimal,
        breakdown: Option<&LineTaxBreakdown>,
    ) -> String {
        // a fully discounted line keeps the rates of its pre-discount subtotal
        if let Some(breakdown) = breakdown.filter(|b| self.use_breakdowns && !b.is_empty()) {
            let rates = self.rates_from_breakdown(breakdown).await;
            if !rates.is_empty() {
                debug!(tax_class, "Tax rate resolved from line breakdown");
                return rates.join(RATE_SEPARATOR);
            }
        }

        if line_tax.is_zero() {
            return NOT_APPLICABLE.to_string();
        }

        if self.use_registry_rates {
            let rates = self.rates_from_class(tax_class).await;
            if !rates.is_empty() {
                debug!(tax_class, "Tax rate resolved from class rates");
                return rates.join(RATE_SEPARATOR);
            }
            // An empty class is indistinguishable from a registry without
            // data here; both fall through to the computed rate.
            debug!(tax_class, "No class rates, computing effective rate");
        }

        effective_rate(line_total, line_tax)
    }

    /// Rate label of a registry entry, empty when the id is unknown
    pub async fn rate_label_for_id(&self, rate_id: i64) -> String {
        match self.registry.rate_by_id(rate_id).await {
            Some(rate) => format_rate(rate.rate),
            None => String::new(),
        }
    }

    async fn rates_from_breakdown(&self, breakdown: &LineTaxBreakdown) -> Vec<String> {
        let mut rates = Vec::new();
        for rate_id in breakdown.contributing_rate_ids() {
            let rate = match self.registry.rate_by_id(rate_id).await {
                Some(rate) => rate.rate,
                None => {
                    warn!(rate_id, "Tax rate referenced by line is not in the registry");
                    Decimal::ZERO
                }
            };
            rates.push(format_rate(rate));
        }
        rates
    }

    async fn rates_from_class(&self, tax_class: &str) -> Vec<String> {
        // one entry per label; a later rate with the same label replaces the
        // earlier one in place
        let mut by_label: Vec<(String, String)> = Vec::new();
        for rate in self.registry.rates_for_class(tax_class).await {
            let formatted = format_rate(rate.rate.round_dp_with_strategy(
                2,
                RoundingStrategy::MidpointAwayFromZero,
            ));
            match by_label.iter_mut().find(|(label, _)| *label == rate.label) {
                Some(entry) => entry.1 = formatted,
                None => by_label.push((rate.label, formatted)),
            }
        }
        by_label.into_iter().map(|(_, formatted)| formatted).collect()
    }
}

/// `round(line_tax / line_total * 100, 1)%`, or [`NOT_APPLICABLE`] for a
/// zero line total
fn effective_rate(line_total: Decimal, line_tax: Decimal) -> String {
    if line_total.is_zero() {
        return NOT_APPLICABLE.to_string();
    }

    let percent = (line_tax / line_total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format_rate(percent)
}
