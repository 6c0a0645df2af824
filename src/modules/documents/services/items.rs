use tracing::debug;

use super::order_document::OrderDocument;
use crate::config::TaxMode;
use crate::modules::documents::models::OrderItemData;
use crate::modules::orders::models::{
    attribute_taxonomy_name, sanitize_title, ItemMeta, LineItem, Product,
};

/// Whole line or one unit of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBasis {
    Total,
    Single,
}

impl OrderDocument {
    /// Template rows for every line item
    pub async fn order_items(&self) -> Vec<OrderItemData> {
        let mut rows = Vec::with_capacity(self.order.items.len());
        for item in &self.order.items {
            rows.push(self.item_data(item).await);
        }

        debug!(order_id = self.order.id, items = rows.len(), "Order items built");
        self.hooks.order_items.apply(rows, &self.order)
    }

    async fn item_data(&self, item: &LineItem) -> OrderItemData {
        let divisor = item.unit_divisor();
        let display = self.settings.tax_display;

        let tax_rates = self
            .tax_rates
            .tax_rate_for_line(&item.tax_class, item.total, item.total_tax, item.taxes.as_ref())
            .await;

        let mut data = OrderItemData {
            item_id: item.id,
            product_id: item.product_id,
            variation_id: item.variation_id,
            name: item.name.clone(),
            quantity: item.quantity,
            line_total: self.format_price(item.total),
            single_line_total: self.format_price(item.total / divisor),
            line_tax: self.format_price(item.total_tax),
            single_line_tax: self.format_price(item.total_tax / divisor),
            tax_rates,
            line_subtotal: self.format_price(item.subtotal),
            line_subtotal_tax: self.format_price(item.subtotal_tax),
            ex_price: self.formatted_item_price(item, PriceBasis::Total, TaxMode::Excl),
            price: self.formatted_item_price(item, PriceBasis::Total, display),
            ex_single_price: self.formatted_item_price(item, PriceBasis::Single, TaxMode::Excl),
            single_price: self.formatted_item_price(item, PriceBasis::Single, display),
            order_price: self.format_price(
                self.platform.line_subtotal(item, display.includes_tax()),
            ),
            meta: render_meta(&item.meta),
            ..Default::default()
        };

        if let Some(product) = &item.product {
            data.thumbnail = self.thumbnail(product);
            data.sku = Some(product.sku.clone()).filter(|sku| !sku.is_empty());
            data.weight = product.weight.clone().filter(|w| !w.is_empty());
            data.dimensions = product
                .dimensions
                .as_ref()
                .map(|d| d.formatted())
                .filter(|d| !d.is_empty());
        }

        data
    }

    /// Pre-discount line price, whole line or per unit
    pub fn formatted_item_price(&self, item: &LineItem, basis: PriceBasis, tax: TaxMode) -> String {
        let amount = self.platform.line_subtotal(item, tax.includes_tax());
        let amount = match basis {
            PriceBasis::Total => amount,
            PriceBasis::Single => amount / item.unit_divisor(),
        };
        self.format_price(amount)
    }

    /// Attribute value of a product by display name
    pub fn product_attribute(&self, name: &str, product: &Product) -> Option<String> {
        let slug = sanitize_title(name);
        let taxonomy = attribute_taxonomy_name(name);

        product
            .attributes
            .get(&slug)
            .or_else(|| product.attributes.get(&taxonomy))
            .filter(|value| !value.is_empty())
            .cloned()
            .or_else(|| {
                product
                    .terms
                    .get(&taxonomy)
                    .and_then(|terms| terms.first())
                    .cloned()
            })
    }

    /// Image tag for the configured thumbnail size
    pub fn thumbnail(&self, product: &Product) -> Option<String> {
        let image = product.images.get(&self.settings.thumbnail_size)?;

        if self.settings.use_path {
            let local = image
                .path
                .as_deref()
                .filter(|path| path.exists())
                .or_else(|| product.attachment_path.as_deref().filter(|path| path.exists()));
            if let Some(path) = local {
                return Some(image_tag(&path.display().to_string()));
            }
        }

        if image.url.is_empty() {
            return None;
        }
        Some(image_tag(&image.url))
    }
}

fn image_tag(src: &str) -> String {
    format!("<img src=\"{}\" alt=\"\" />", src)
}

fn render_meta(meta: &[ItemMeta]) -> String {
    if meta.is_empty() {
        return String::new();
    }

    let entries: String = meta
        .iter()
        .map(|entry| format!("<li><strong>{}:</strong> {}</li>", entry.key, entry.value))
        .collect();
    format!("<ul class=\"wc-item-meta\">{}</ul>", entries)
}
