use serde::{Deserialize, Serialize};

/// Template-ready row for one line item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemData {
    pub item_id: i64,
    pub product_id: i64,
    pub variation_id: Option<i64>,
    pub name: String,
    pub quantity: i32,

    /// After discount
    pub line_total: String,
    pub single_line_total: String,
    pub line_tax: String,
    pub single_line_tax: String,
    pub tax_rates: String,

    /// Before discount
    pub line_subtotal: String,
    pub line_subtotal_tax: String,
    pub ex_price: String,
    pub price: String,
    pub ex_single_price: String,
    pub single_price: String,
    /// Line subtotal as the store displays it
    pub order_price: String,

    pub thumbnail: Option<String>,
    pub sku: Option<String>,
    pub weight: Option<String>,
    pub dimensions: Option<String>,

    /// Rendered item meta, empty when the line has none
    pub meta: String,
}
