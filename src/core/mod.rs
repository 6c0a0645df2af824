pub mod currency;
pub mod dates;
pub mod error;
pub mod traits;

pub use currency::{Currency, CurrencyPosition, PriceFormat};
pub use dates::DateFormatter;
pub use error::{AppError, ResolutionError, Result};
