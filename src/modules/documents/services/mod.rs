pub mod document_service;
pub mod items;
pub mod order_document;
pub mod text;
pub mod totals;

pub use document_service::{DocumentService, StoreSnapshot};
pub use items::PriceBasis;
pub use order_document::{NoteFilter, OrderDocument};
pub use text::{autop, nl2br};
