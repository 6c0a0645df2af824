use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{AppError, Result};

/// ISO 4217 currency of an order
///
/// Codes without a dedicated variant are carried as [`Currency::Other`],
/// print their code as the symbol and use two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    /// US Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
    /// Pound Sterling (2 decimal places)
    GBP,
    /// Indonesian Rupiah (no decimal places)
    IDR,
    /// Malaysian Ringgit (2 decimal places)
    MYR,
    /// Japanese Yen (no decimal places)
    JPY,
    /// Any other code, stored upper-cased
    Other(String),
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::IDR | Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.scale(), RoundingStrategy::MidpointAwayFromZero)
    }

    /// Three-letter code
    pub fn code(&self) -> &str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::IDR => "IDR",
            Currency::MYR => "MYR",
            Currency::JPY => "JPY",
            Currency::Other(code) => code,
        }
    }

    /// Display symbol used in formatted prices
    pub fn symbol(&self) -> &str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::IDR => "Rp",
            Currency::MYR => "RM",
            Currency::JPY => "¥",
            Currency::Other(code) => code,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        let currency = match code.as_str() {
            "USD" => Currency::USD,
            "EUR" => Currency::EUR,
            "GBP" => Currency::GBP,
            "IDR" => Currency::IDR,
            "MYR" => Currency::MYR,
            "JPY" => Currency::JPY,
            _ if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
                Currency::Other(code.clone())
            }
            _ => return Err(format!("Invalid currency: {}", s)),
        };
        Ok(currency)
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// Where the currency symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyPosition {
    Left,
    Right,
    LeftSpace,
    RightSpace,
}

impl FromStr for CurrencyPosition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(CurrencyPosition::Left),
            "right" => Ok(CurrencyPosition::Right),
            "left_space" => Ok(CurrencyPosition::LeftSpace),
            "right_space" => Ok(CurrencyPosition::RightSpace),
            _ => Err(format!("Invalid currency position: {}", s)),
        }
    }
}

/// Store-wide price display rules
///
/// `decimals` overrides the currency's own scale when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    pub position: CurrencyPosition,
    pub thousand_separator: String,
    pub decimal_separator: String,
    #[serde(default)]
    pub decimals: Option<u32>,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            position: CurrencyPosition::Left,
            thousand_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimals: None,
        }
    }
}

impl PriceFormat {
    fn decimals_for(&self, currency: &Currency) -> u32 {
        self.decimals.unwrap_or_else(|| currency.scale())
    }

    /// Formats an amount for display, always carrying the currency symbol
    pub fn format(&self, amount: Decimal, currency: &Currency) -> String {
        let decimals = self.decimals_for(currency);
        let rounded =
            amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let digits = format!("{:.width$}", rounded.abs(), width = decimals as usize);
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits.as_str(), None),
        };

        let mut number = group_thousands(int_part, &self.thousand_separator);
        if let Some(frac_part) = frac_part {
            number.push_str(&self.decimal_separator);
            number.push_str(frac_part);
        }

        let symbol = currency.symbol();
        let priced = match self.position {
            CurrencyPosition::Left => format!("{}{}", symbol, number),
            CurrencyPosition::Right => format!("{}{}", number, symbol),
            CurrencyPosition::LeftSpace => format!("{} {}", symbol, number),
            CurrencyPosition::RightSpace => format!("{} {}", number, symbol),
        };

        if negative {
            format!("-{}", priced)
        } else {
            priced
        }
    }

    /// Parses a string produced by [`PriceFormat::format`] back into an amount
    pub fn parse(&self, text: &str, currency: &Currency) -> Result<Decimal> {
        let trimmed = text.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let symbol = currency.symbol();
        let number = rest
            .strip_prefix(symbol)
            .or_else(|| rest.strip_suffix(symbol))
            .ok_or_else(|| {
                AppError::validation(format!("Price '{}' does not carry symbol {}", text, symbol))
            })?
            .trim();

        let mut normalized = if self.thousand_separator.is_empty() {
            number.to_string()
        } else {
            number.replace(self.thousand_separator.as_str(), "")
        };
        if self.decimal_separator != "." {
            normalized = normalized.replace(self.decimal_separator.as_str(), ".");
        }

        let value = Decimal::from_str(&normalized)
            .map_err(|e| AppError::validation(format!("Invalid price '{}': {}", text, e)))?;

        Ok(if negative { -value } else { value })
    }
}

fn group_thousands(int_part: &str, separator: &str) -> String {
    if separator.is_empty() || int_part.len() <= 3 {
        return int_part.to_string();
    }

    let head = int_part.len() % 3;
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 * separator.len());
    for (idx, ch) in int_part.chars().enumerate() {
        if idx != 0 && (idx + 3 - head) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
