use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::order_document::OrderDocument;
use crate::config::DocumentSettings;
use crate::core::error::AppError;
use crate::core::traits::ReadRepository;
use crate::modules::documents::hooks::DocumentHooks;
use crate::modules::orders::models::Order;
use crate::modules::orders::repositories::{InMemoryOrderRepository, OrderRepository};
use crate::modules::orders::services::OrderResolver;
use crate::modules::platform::PlatformApi;
use crate::modules::taxes::models::TaxRate;
use crate::modules::taxes::repositories::{InMemoryTaxRateRegistry, TaxRateRegistry};

/// Serialized store of orders and tax rates, as read from YAML or JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub orders: Vec<Order>,
    pub tax_rates: Vec<TaxRate>,
}

impl StoreSnapshot {
    /// Load a snapshot; `.json` files are read as JSON, everything else as YAML
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let snapshot: StoreSnapshot = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            _ => serde_yaml::from_str(&contents)?,
        };

        info!(
            path = %path.display(),
            orders = snapshot.orders.len(),
            tax_rates = snapshot.tax_rates.len(),
            "Store snapshot loaded"
        );
        Ok(snapshot)
    }
}

/// Service for building documents by order id
pub struct DocumentService {
    order_repo: Arc<dyn OrderRepository>,
    tax_registry: Arc<dyn TaxRateRegistry>,
    platform: Arc<dyn PlatformApi>,
    settings: DocumentSettings,
    hooks: DocumentHooks,
}

impl DocumentService {
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        tax_registry: Arc<dyn TaxRateRegistry>,
        platform: Arc<dyn PlatformApi>,
        settings: DocumentSettings,
    ) -> Self {
        Self {
            order_repo,
            tax_registry,
            platform,
            settings,
            hooks: DocumentHooks::default(),
        }
    }

    /// Service backed by in-memory stores filled from a snapshot
    pub fn from_snapshot(
        snapshot: StoreSnapshot,
        platform: Arc<dyn PlatformApi>,
        settings: DocumentSettings,
    ) -> Self {
        Self::new(
            Arc::new(InMemoryOrderRepository::from_orders(snapshot.orders)),
            Arc::new(InMemoryTaxRateRegistry::from_rates(snapshot.tax_rates)),
            platform,
            settings,
        )
    }

    pub fn with_hooks(mut self, hooks: DocumentHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Load an order and wrap it in a document
    pub async fn document_for(&self, order_id: i64) -> Result<OrderDocument, AppError> {
        let order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        let document = OrderDocument::new(
            order,
            OrderResolver::new(self.order_repo.clone()),
            self.tax_registry.clone(),
            self.platform.clone(),
            self.settings.clone(),
        )
        .with_hooks(self.hooks.clone());

        Ok(document)
    }
}
