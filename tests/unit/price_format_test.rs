// Property-based tests for price formatting
//
// Formatting an amount and parsing it back with the same format settings
// must return the amount rounded to the currency's precision.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use order_documents::core::{Currency, CurrencyPosition, PriceFormat};

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::IDR),
        Just(Currency::MYR),
        Just(Currency::JPY),
        Just(Currency::Other("CAD".to_string())),
    ]
}

fn position() -> impl Strategy<Value = CurrencyPosition> {
    prop_oneof![
        Just(CurrencyPosition::Left),
        Just(CurrencyPosition::Right),
        Just(CurrencyPosition::LeftSpace),
        Just(CurrencyPosition::RightSpace),
    ]
}

fn separators() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        Just((",".to_string(), ".".to_string())),
        Just((".".to_string(), ",".to_string())),
        Just((" ".to_string(), ",".to_string())),
        Just((String::new(), ".".to_string())),
    ]
}

proptest! {
    #[test]
    fn test_format_then_parse_returns_rounded_amount(
        mills in -10_000_000_000i64..10_000_000_000i64,
        currency in currency(),
        position in position(),
        (thousand_separator, decimal_separator) in separators(),
    ) {
        let amount = Decimal::new(mills, 3);
        let format = PriceFormat {
            position,
            thousand_separator,
            decimal_separator,
            decimals: None,
        };

        let text = format.format(amount, &currency);
        let parsed = format.parse(&text, &currency).unwrap();

        prop_assert_eq!(parsed, currency.round(amount), "round trip of {} via {:?}", amount, text);
    }

    #[test]
    fn test_formatted_price_carries_symbol(
        cents in 0i64..1_000_000_000i64,
        currency in currency(),
    ) {
        let text = PriceFormat::default().format(Decimal::new(cents, 2), &currency);
        prop_assert!(text.starts_with(currency.symbol()));
    }
}

#[test]
fn test_thousand_grouping() {
    let format = PriceFormat::default();
    assert_eq!(format.format(dec!(1234567.891), &Currency::USD), "$1,234,567.89");
    assert_eq!(format.format(dec!(999), &Currency::USD), "$999.00");
    assert_eq!(format.format(dec!(1500000), &Currency::IDR), "Rp1,500,000");
}

#[test]
fn test_european_layout() {
    let format = PriceFormat {
        position: CurrencyPosition::RightSpace,
        thousand_separator: ".".into(),
        decimal_separator: ",".into(),
        decimals: None,
    };
    assert_eq!(format.format(dec!(1234.5), &Currency::EUR), "1.234,50 €");
    assert_eq!(format.parse("1.234,50 €", &Currency::EUR).unwrap(), dec!(1234.50));
}

#[test]
fn test_negative_amounts_lead_with_minus() {
    let format = PriceFormat::default();
    assert_eq!(format.format(dec!(-22), &Currency::USD), "-$22.00");
    assert_eq!(format.parse("-$22.00", &Currency::USD).unwrap(), dec!(-22));
}

#[test]
fn test_explicit_decimals_override_currency_scale() {
    let format = PriceFormat {
        decimals: Some(3),
        ..Default::default()
    };
    assert_eq!(format.format(dec!(1.23456), &Currency::USD), "$1.235");
}

#[test]
fn test_parse_rejects_foreign_symbol() {
    assert!(PriceFormat::default().parse("€10.00", &Currency::USD).is_err());
}
