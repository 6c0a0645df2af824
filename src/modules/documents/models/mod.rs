mod item_data;
mod totals;
mod view;

pub use item_data::OrderItemData;
pub use totals::{
    DerivedTotals, DiscountRow, DiscountScope, FeeRow, LabeledValue, ShippingRow, TaxRow, TotalRow,
};
pub use view::DocumentView;
