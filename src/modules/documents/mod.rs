pub mod hooks;
pub mod models;
pub mod services;

pub use hooks::{DocumentHooks, FilterChain};
pub use models::{DerivedTotals, DiscountScope, DocumentView, OrderItemData, TotalRow};
pub use services::{DocumentService, NoteFilter, OrderDocument, PriceBasis, StoreSnapshot};
