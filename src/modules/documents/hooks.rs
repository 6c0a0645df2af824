// Extension points for plugin-style customization.
//
// Each point holds an ordered chain of transforms; every transform receives
// the value produced by the previous one together with the order the
// document was built for.

use std::fmt;
use std::sync::Arc;

use super::models::{DerivedTotals, DiscountRow, LabeledValue, OrderItemData};
use crate::modules::orders::models::Order;

/// One registered transform
pub type Filter<T> = Arc<dyn Fn(T, &Order) -> T + Send + Sync>;

/// Supplies an invoice number from outside, given the order id
pub type InvoiceNumberProvider = Arc<dyn Fn(i64) -> Option<String> + Send + Sync>;

/// Ordered transforms for one extension point
pub struct FilterChain<T> {
    filters: Vec<Filter<T>>,
}

impl<T> FilterChain<T> {
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Append a transform; transforms run in registration order
    pub fn register<F>(&mut self, filter: F)
    where
        F: Fn(T, &Order) -> T + Send + Sync + 'static,
    {
        self.filters.push(Arc::new(filter));
    }

    pub fn apply(&self, value: T, order: &Order) -> T {
        self.filters.iter().fold(value, |value, filter| filter(value, order))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T> Default for FilterChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FilterChain<T> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
        }
    }
}

impl<T> fmt::Debug for FilterChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// All extension points of a document
#[derive(Clone, Default)]
pub struct DocumentHooks {
    pub billing_address: FilterChain<String>,
    pub shipping_address: FilterChain<String>,
    pub ships_to_different_address: FilterChain<bool>,
    pub billing_email: FilterChain<String>,
    pub billing_phone: FilterChain<String>,
    pub custom_field: FilterChain<String>,
    pub order_number: FilterChain<String>,
    pub payment_method: FilterChain<String>,
    pub shipping_notes: FilterChain<String>,
    pub order_items: FilterChain<Vec<OrderItemData>>,
    pub totals: FilterChain<DerivedTotals>,
    pub grand_total: FilterChain<LabeledValue>,
    pub discount: FilterChain<Option<DiscountRow>>,
    pub invoice_number: Option<InvoiceNumberProvider>,
}

impl fmt::Debug for DocumentHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentHooks")
            .field("billing_address", &self.billing_address)
            .field("shipping_address", &self.shipping_address)
            .field("order_items", &self.order_items)
            .field("totals", &self.totals)
            .field("invoice_number", &self.invoice_number.is_some())
            .finish_non_exhaustive()
    }
}
