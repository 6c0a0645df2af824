use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::taxes::models::TaxRate;

/// Lookups into the store's tax rate table
///
/// Misses are not errors: an unknown id yields `None` and an unknown class
/// yields no rates.
#[async_trait]
pub trait TaxRateRegistry: Send + Sync {
    /// All rates configured under a tax class
    async fn rates_for_class(&self, tax_class: &str) -> Vec<TaxRate>;

    /// A single rate by id
    async fn rate_by_id(&self, rate_id: i64) -> Option<TaxRate>;

    /// Every configured rate, ordered by id
    async fn all_rates(&self) -> Vec<TaxRate>;
}

/// Tax rate table held in memory
#[derive(Debug, Default)]
pub struct InMemoryTaxRateRegistry {
    rates: RwLock<BTreeMap<i64, TaxRate>>,
}

impl InMemoryTaxRateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rates(rates: impl IntoIterator<Item = TaxRate>) -> Self {
        let rates = rates.into_iter().map(|rate| (rate.id, rate)).collect();
        Self {
            rates: RwLock::new(rates),
        }
    }

    pub async fn insert(&self, rate: TaxRate) {
        self.rates.write().await.insert(rate.id, rate);
    }
}

#[async_trait]
impl TaxRateRegistry for InMemoryTaxRateRegistry {
    async fn rates_for_class(&self, tax_class: &str) -> Vec<TaxRate> {
        self.rates
            .read()
            .await
            .values()
            .filter(|rate| rate.in_class(tax_class))
            .cloned()
            .collect()
    }

    async fn rate_by_id(&self, rate_id: i64) -> Option<TaxRate> {
        self.rates.read().await.get(&rate_id).cloned()
    }

    async fn all_rates(&self) -> Vec<TaxRate> {
        self.rates.read().await.values().cloned().collect()
    }
}
