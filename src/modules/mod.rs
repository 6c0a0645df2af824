pub mod documents;
pub mod orders;
pub mod platform;
pub mod taxes;
