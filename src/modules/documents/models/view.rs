use serde::{Deserialize, Serialize};

use super::item_data::OrderItemData;
use super::totals::{DerivedTotals, DiscountRow, FeeRow, LabeledValue, ShippingRow, TaxRow};

/// Everything a template needs for one document, in one bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentView {
    pub order_id: i64,
    pub is_refund: bool,
    pub order_number: String,
    pub order_date: String,
    pub invoice_number: String,
    pub invoice_date: String,

    pub billing_address: String,
    pub shipping_address: String,
    pub ships_to_different_address: bool,
    pub billing_email: String,
    pub billing_phone: String,

    pub payment_method: String,
    pub shipping_method: String,
    pub shipping_notes: String,
    pub customer_notes: Vec<String>,

    pub items: Vec<OrderItemData>,

    pub subtotal: LabeledValue,
    pub shipping: ShippingRow,
    pub discount: Option<DiscountRow>,
    pub fees: Option<Vec<FeeRow>>,
    pub taxes: Option<Vec<TaxRow>>,
    pub grand_total: LabeledValue,
    pub totals: DerivedTotals,
}
