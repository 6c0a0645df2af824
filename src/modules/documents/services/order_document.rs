use std::borrow::Cow;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::text::{autop, nl2br};
use crate::config::DocumentSettings;
use crate::core::Result;
use crate::modules::documents::hooks::DocumentHooks;
use crate::modules::documents::models::DocumentView;
use crate::modules::orders::models::{Order, OrderNote};
use crate::modules::orders::services::OrderResolver;
use crate::modules::platform::PlatformApi;
use crate::modules::taxes::repositories::TaxRateRegistry;
use crate::modules::taxes::services::TaxRateResolver;

/// Which order notes to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFilter {
    /// Notes visible to the customer
    #[default]
    Customer,
    /// Staff-only notes
    Private,
    All,
}

impl std::str::FromStr for NoteFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "customer" => Ok(NoteFilter::Customer),
            "private" => Ok(NoteFilter::Private),
            "all" => Ok(NoteFilter::All),
            _ => Err(format!("Invalid note filter: {}", s)),
        }
    }
}

/// Display data for one invoice or packing slip
///
/// Built per render from a read-only order snapshot. Getters that read
/// customer-facing fields resolve refunds to their parent first and fail
/// with a resolution error when that is impossible; everything else degrades
/// to empty values.
pub struct OrderDocument {
    pub(super) order: Order,
    pub(super) resolver: OrderResolver,
    pub(super) tax_rates: TaxRateResolver,
    pub(super) platform: Arc<dyn PlatformApi>,
    pub(super) settings: DocumentSettings,
    pub(super) hooks: DocumentHooks,
}

impl OrderDocument {
    pub fn new(
        order: Order,
        resolver: OrderResolver,
        registry: Arc<dyn TaxRateRegistry>,
        platform: Arc<dyn PlatformApi>,
        settings: DocumentSettings,
    ) -> Self {
        let tax_rates = TaxRateResolver::new(registry)
            .with_breakdowns(platform.supports_line_tax_data())
            .with_registry_rates(platform.supports_rate_lookup() && !settings.calculate_tax_rate);

        Self {
            order,
            resolver,
            tax_rates,
            platform,
            settings,
            hooks: DocumentHooks::default(),
        }
    }

    /// Attach extension hooks
    pub fn with_hooks(mut self, hooks: DocumentHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    pub fn platform(&self) -> &dyn PlatformApi {
        self.platform.as_ref()
    }

    pub fn is_refund(&self) -> bool {
        self.resolver.is_refund(&self.order)
    }

    /// The order customer-facing fields are read from
    pub async fn origin(&self) -> Result<Cow<'_, Order>> {
        Ok(self.resolver.resolve_origin(&self.order).await?)
    }

    /// Format an amount in the document order's currency
    pub fn format_price(&self, amount: Decimal) -> String {
        self.settings.format_price(amount, &self.order.currency)
    }

    /// Whether billing and shipping differ on any configured field
    pub async fn addresses_differ(&self) -> Result<bool> {
        let origin = self.origin().await?;

        let differs = self
            .settings
            .address_comparison_fields
            .iter()
            .any(|field| origin.billing.field(*field) != origin.shipping.field(*field));

        Ok(self.hooks.ships_to_different_address.apply(differs, &origin))
    }

    pub async fn billing_address(&self) -> Result<String> {
        let origin = self.origin().await?;
        let address = self.or_not_available(origin.billing.formatted());
        Ok(self.hooks.billing_address.apply(address, &origin))
    }

    pub async fn shipping_address(&self) -> Result<String> {
        let origin = self.origin().await?;
        let address = self.or_not_available(origin.shipping.formatted());
        Ok(self.hooks.shipping_address.apply(address, &origin))
    }

    pub async fn billing_email(&self) -> Result<String> {
        let email = self
            .read_with_parent_fallback(|order| Some(order.billing.email.clone()))
            .await?;
        Ok(self.hooks.billing_email.apply(email, &self.order))
    }

    pub async fn billing_phone(&self) -> Result<String> {
        let phone = self
            .read_with_parent_fallback(|order| Some(order.billing.phone.clone()))
            .await?;
        Ok(self.hooks.billing_phone.apply(phone, &self.order))
    }

    /// Custom field value; refunds fall back to the parent's value
    pub async fn custom_field(&self, key: &str) -> Result<String> {
        let value = self
            .read_with_parent_fallback(|order| order.meta_value(key).map(str::to_string))
            .await?;
        Ok(self.hooks.custom_field.apply(value, &self.order))
    }

    /// Custom field prefixed with `label`, newlines as `<br />`; empty when
    /// the field is unset and `display_empty` is off
    pub async fn custom_field_display(
        &self,
        key: &str,
        label: &str,
        display_empty: bool,
    ) -> Result<String> {
        let value = self.custom_field(key).await?;
        if value.is_empty() && !display_empty {
            return Ok(String::new());
        }

        let prefix = if label.is_empty() {
            String::new()
        } else {
            format!("{} ", label)
        };
        Ok(format!("{}{}", prefix, nl2br(&value)))
    }

    /// Origin order number without a leading `#`
    pub async fn order_number(&self) -> Result<String> {
        let origin = self.origin().await?;
        let number = origin.order_number.trim_start_matches('#').to_string();
        Ok(self.hooks.order_number.apply(number, &origin))
    }

    pub async fn order_date(&self) -> Result<String> {
        let origin = self.origin().await?;
        Ok(self.settings.date.format(origin.created_at))
    }

    /// Externally supplied number first, then the origin's own invoice number
    pub async fn invoice_number(&self) -> Result<String> {
        let origin = self.origin().await?;

        if let Some(provider) = &self.hooks.invoice_number {
            if let Some(number) = provider(origin.id) {
                debug!(order_id = origin.id, "Invoice number supplied by provider");
                return Ok(number);
            }
        }

        Ok(origin
            .invoice
            .as_ref()
            .map(|invoice| invoice.formatted_number.clone())
            .unwrap_or_default())
    }

    pub async fn invoice_date(&self) -> Result<String> {
        let origin = self.origin().await?;
        Ok(origin
            .invoice
            .as_ref()
            .map(|invoice| self.settings.date.format(invoice.date))
            .unwrap_or_default())
    }

    pub fn current_date(&self) -> String {
        self.settings.date.format(Utc::now())
    }

    pub async fn payment_method(&self) -> Result<String> {
        let origin = self.origin().await?;
        let method = origin.payment_method_title.clone();
        Ok(self.hooks.payment_method.apply(method, &origin))
    }

    /// Shipping method of the document's own order
    pub fn shipping_method(&self) -> String {
        self.order.shipping_method.clone()
    }

    /// Refund reason for refunds, the customer's note otherwise
    pub fn shipping_notes(&self) -> String {
        let notes = if self.is_refund() {
            self.platform.refund_reason(&self.order).unwrap_or_default()
        } else {
            self.order
                .customer_note
                .as_deref()
                .map(autop)
                .unwrap_or_default()
        };
        self.hooks.shipping_notes.apply(notes, &self.order)
    }

    /// Notes recorded on the origin order
    pub async fn order_notes(&self, filter: NoteFilter) -> Result<Vec<OrderNote>> {
        let origin = self.origin().await?;
        Ok(origin
            .notes
            .iter()
            .filter(|note| match filter {
                NoteFilter::Customer => note.customer_note,
                NoteFilter::Private => !note.customer_note,
                NoteFilter::All => true,
            })
            .cloned()
            .collect())
    }

    /// Bundle every display value for the template
    pub async fn view(&self) -> Result<DocumentView> {
        debug!(
            order_id = self.order.id,
            refund = self.is_refund(),
            platform = self.platform.name(),
            "Building document view"
        );

        let display = self.settings.tax_display;
        let customer_notes = self
            .order_notes(NoteFilter::Customer)
            .await?
            .into_iter()
            .map(|note| autop(&note.content))
            .collect();

        Ok(DocumentView {
            order_id: self.order.id,
            is_refund: self.is_refund(),
            order_number: self.order_number().await?,
            order_date: self.order_date().await?,
            invoice_number: self.invoice_number().await?,
            invoice_date: self.invoice_date().await?,
            billing_address: self.billing_address().await?,
            shipping_address: self.shipping_address().await?,
            ships_to_different_address: self.addresses_differ().await?,
            billing_email: self.billing_email().await?,
            billing_phone: self.billing_phone().await?,
            payment_method: self.payment_method().await?,
            shipping_method: self.shipping_method(),
            shipping_notes: self.shipping_notes(),
            customer_notes,
            items: self.order_items().await,
            subtotal: self.subtotal(display),
            shipping: self.shipping(display),
            discount: self.discount(Default::default(), display),
            fees: self.fees(display),
            taxes: self.taxes().await,
            grand_total: self.grand_total(display),
            totals: self.aggregate_totals(),
        })
    }

    fn or_not_available(&self, value: String) -> String {
        if value.is_empty() {
            self.settings.not_available_label.clone()
        } else {
            value
        }
    }

    /// Read a field from the order; when empty on a refund, read it from
    /// the parent instead. Never more than one hop.
    async fn read_with_parent_fallback<F>(&self, read: F) -> Result<String>
    where
        F: Fn(&Order) -> Option<String>,
    {
        let value = read(&self.order).unwrap_or_default();
        if !value.is_empty() || !self.is_refund() {
            return Ok(value);
        }

        let origin = self.origin().await?;
        Ok(read(origin.as_ref()).unwrap_or_default())
    }
}
