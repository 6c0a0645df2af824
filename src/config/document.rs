use crate::core::dates::DEFAULT_DATE_FORMAT;
use crate::core::{AppError, Currency, CurrencyPosition, DateFormatter, PriceFormat, Result};
use crate::modules::orders::models::AddressField;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Whether amounts are shown with or without tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxMode {
    Incl,
    #[default]
    Excl,
}

impl TaxMode {
    pub fn includes_tax(&self) -> bool {
        matches!(self, TaxMode::Incl)
    }
}

impl fmt::Display for TaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxMode::Incl => write!(f, "incl"),
            TaxMode::Excl => write!(f, "excl"),
        }
    }
}

impl FromStr for TaxMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incl" => Ok(TaxMode::Incl),
            "excl" => Ok(TaxMode::Excl),
            _ => Err(format!("Invalid tax mode: {}", s)),
        }
    }
}

/// How tax totals are listed when prices are shown inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxTotalDisplay {
    /// One entry per tax rate
    #[default]
    Itemized,
    /// A single combined entry
    Single,
}

impl FromStr for TaxTotalDisplay {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "itemized" => Ok(TaxTotalDisplay::Itemized),
            "single" => Ok(TaxTotalDisplay::Single),
            _ => Err(format!("Invalid tax total display: {}", s)),
        }
    }
}

/// Named overrides for everything a document derives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub tax_enabled: bool,
    pub tax_display: TaxMode,
    pub tax_total_display: TaxTotalDisplay,
    /// "Tax" or "VAT", used in the combined inclusive-tax note
    pub tax_label: String,
    pub price_format: PriceFormat,
    pub date: DateFormatter,
    /// Shown in place of an empty address
    pub not_available_label: String,
    pub thumbnail_size: String,
    /// Prefer server paths over URLs for product images
    pub use_path: bool,
    /// Always compute line tax rates from amounts instead of asking the registry
    pub calculate_tax_rate: bool,
    /// Fields compared to decide whether billing and shipping differ
    pub address_comparison_fields: Vec<AddressField>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            tax_enabled: true,
            tax_display: TaxMode::Excl,
            tax_total_display: TaxTotalDisplay::Itemized,
            tax_label: "Tax".to_string(),
            price_format: PriceFormat::default(),
            date: DateFormatter::default(),
            not_available_label: "N/A".to_string(),
            thumbnail_size: "shop_thumbnail".to_string(),
            use_path: true,
            calculate_tax_rate: false,
            address_comparison_fields: AddressField::DEFAULT_COMPARISON.to_vec(),
        }
    }
}

impl DocumentSettings {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let address_comparison_fields = match env::var("DOC_ADDRESS_FIELDS") {
            Ok(list) => list
                .split(',')
                .filter(|field| !field.trim().is_empty())
                .map(|field| field.parse::<AddressField>().map_err(AppError::Configuration))
                .collect::<Result<Vec<_>>>()?,
            Err(_) => defaults.address_comparison_fields,
        };

        Ok(DocumentSettings {
            tax_enabled: env_or("DOC_TAX_ENABLED", defaults.tax_enabled)?,
            tax_display: env_or("DOC_TAX_DISPLAY", defaults.tax_display)?,
            tax_total_display: env_or("DOC_TAX_TOTAL_DISPLAY", defaults.tax_total_display)?,
            tax_label: env::var("DOC_TAX_LABEL").unwrap_or(defaults.tax_label),
            price_format: PriceFormat {
                position: env_or("DOC_CURRENCY_POSITION", CurrencyPosition::Left)?,
                thousand_separator: env::var("DOC_THOUSAND_SEPARATOR")
                    .unwrap_or(defaults.price_format.thousand_separator),
                decimal_separator: env::var("DOC_DECIMAL_SEPARATOR")
                    .unwrap_or(defaults.price_format.decimal_separator),
                decimals: match env::var("DOC_PRICE_DECIMALS") {
                    Ok(value) => Some(value.parse().map_err(|_| {
                        AppError::Configuration("Invalid DOC_PRICE_DECIMALS".to_string())
                    })?),
                    Err(_) => None,
                },
            },
            date: DateFormatter::new(
                env::var("DOC_DATE_FORMAT").unwrap_or_else(|_| DEFAULT_DATE_FORMAT.to_string()),
                env_or("DOC_UTC_OFFSET_MINUTES", 0)?,
            ),
            not_available_label: env::var("DOC_NOT_AVAILABLE_LABEL")
                .unwrap_or(defaults.not_available_label),
            thumbnail_size: env::var("DOC_THUMBNAIL_SIZE").unwrap_or(defaults.thumbnail_size),
            use_path: env_or("DOC_USE_PATH", defaults.use_path)?,
            calculate_tax_rate: env_or("DOC_CALCULATE_TAX_RATE", defaults.calculate_tax_rate)?,
            address_comparison_fields,
        })
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.address_comparison_fields.is_empty() {
            return Err(AppError::Configuration(
                "Address comparison fields cannot be empty".to_string(),
            ));
        }

        if self.price_format.decimal_separator.is_empty() {
            return Err(AppError::Configuration(
                "Decimal separator cannot be empty".to_string(),
            ));
        }

        if self.price_format.thousand_separator == self.price_format.decimal_separator {
            return Err(AppError::Configuration(
                "Thousand and decimal separators must differ".to_string(),
            ));
        }

        if self.price_format.decimals.is_some_and(|decimals| decimals > 8) {
            return Err(AppError::Configuration(
                "Price decimals cannot exceed 8".to_string(),
            ));
        }

        if !self.date.has_valid_offset() {
            return Err(AppError::Configuration(format!(
                "UTC offset must be within 1440 minutes, got {}",
                self.date.utc_offset_minutes
            )));
        }

        if !DateFormatter::is_valid_pattern(&self.date.pattern) {
            return Err(AppError::Configuration(format!(
                "Invalid date format: {}",
                self.date.pattern
            )));
        }

        Ok(())
    }

    /// Format an amount in the given currency
    pub fn format_price(&self, amount: Decimal, currency: &Currency) -> String {
        self.price_format.format(amount, currency)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        Err(_) => Ok(default),
    }
}
