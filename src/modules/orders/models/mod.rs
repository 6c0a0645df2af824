mod address;
mod line_item;
mod order;
mod product;

pub use address::{Address, AddressField, ADDRESS_LINE_BREAK};
pub use line_item::{ItemMeta, LineItem, LineTaxBreakdown};
pub use order::{
    FeeLine, InvoiceRecord, Order, OrderKind, OrderNote, OrderTaxLine, RefundSummary,
};
pub use product::{attribute_taxonomy_name, sanitize_title, Dimensions, Product, ProductImage};
