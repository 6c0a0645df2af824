// Property-based tests for discount calculation
//
// - Line discounts summed across an order equal the document discount
// - Discounts rounding to zero at three decimals are not reported

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use helpers::*;
use order_documents::config::{DocumentSettings, TaxMode};
use order_documents::core::Currency;
use order_documents::documents::DiscountScope;
use order_documents::orders::{LineItem, Order};
use order_documents::platform::LegacyPlatform;

fn line() -> impl Strategy<Value = LineItem> {
    (1i64..100_000, 0i64..100_000, 0i64..10_000, 1i32..10).prop_map(
        |(subtotal, discount, tax, qty)| {
            let subtotal = Decimal::new(subtotal, 2);
            let total = (subtotal - Decimal::new(discount, 2)).max(Decimal::ZERO);
            let subtotal_tax = Decimal::new(tax, 2);
            let total_tax = (subtotal_tax * total / subtotal).round_dp(2);
            LineItem::new(1, "Item", qty, subtotal, total).with_tax(subtotal_tax, total_tax)
        },
    )
}

fn order_with(items: Vec<LineItem>) -> Order {
    let mut order = Order::new(7, Currency::USD, Utc::now());
    order.items = items;
    order
}

proptest! {
    #[test]
    fn test_line_discounts_sum_to_order_discount(items in prop::collection::vec(line(), 1..8)) {
        let expected_incl: Decimal = items.iter().map(|item| item.discount(true)).sum();
        let expected_excl: Decimal = items.iter().map(|item| item.discount(false)).sum();
        let document = TestDataFactory::document_on(
            order_with(items),
            Arc::new(LegacyPlatform),
            DocumentSettings::default(),
        );

        let incl = document
            .discount(DiscountScope::Total, TaxMode::Incl)
            .map(|row| row.raw_value)
            .unwrap_or(Decimal::ZERO);
        let excl = document
            .discount(DiscountScope::Total, TaxMode::Excl)
            .map(|row| row.raw_value)
            .unwrap_or(Decimal::ZERO);

        prop_assert_eq!(incl, expected_incl);
        prop_assert_eq!(excl, expected_excl);
    }

    #[test]
    fn test_line_discount_is_never_negative_for_reductions(item in line()) {
        prop_assert!(item.discount(false) >= Decimal::ZERO);
    }
}

#[test]
fn test_line_discount_including_tax() {
    let item = LineItem::new(1, "Notebook", 2, dec!(20.00), dec!(18.00))
        .with_tax(dec!(2.00), dec!(1.80));
    assert_eq!(item.discount(true), dec!(2.20));
    assert_eq!(item.discount(false), dec!(2.00));

    let document = TestDataFactory::document_on(
        order_with(vec![item.clone(), item]),
        Arc::new(LegacyPlatform),
        DocumentSettings::default(),
    );
    let discount = document.discount(DiscountScope::Total, TaxMode::Incl).unwrap();
    assert_eq!(discount.raw_value, dec!(4.40));
    assert_eq!(discount.value, "$4.40");
    assert_eq!(discount.label, "Discount");
}

#[test]
fn test_discount_below_rounding_threshold_is_absent() {
    let mut order = order_with(vec![]);
    order.discount_total = dec!(0.0004);
    let document = TestDataFactory::document(order, DocumentSettings::default());
    assert!(document.discount(DiscountScope::Total, TaxMode::Excl).is_none());
}

#[test]
fn test_discount_at_rounding_threshold_is_present() {
    let mut order = order_with(vec![]);
    order.discount_total = dec!(0.0006);
    let document = TestDataFactory::document(order, DocumentSettings::default());
    let discount = document.discount(DiscountScope::Total, TaxMode::Excl).unwrap();
    assert_eq!(discount.raw_value, dec!(0.0006));
}

#[test]
fn test_discount_at_rounding_midpoint_rounds_away_from_zero() {
    let mut order = order_with(vec![]);
    order.discount_total = dec!(0.0005);
    let document = TestDataFactory::document(order, DocumentSettings::default());
    let discount = document.discount(DiscountScope::Total, TaxMode::Excl).unwrap();
    assert_eq!(discount.raw_value, dec!(0.0005));
}

#[test]
fn test_discount_hook_can_suppress_row() {
    let mut hooks = order_documents::documents::DocumentHooks::default();
    hooks.discount.register(|_, _| None);
    let document =
        TestDataFactory::document(TestDataFactory::paid_order(), DocumentSettings::default())
            .with_hooks(hooks);
    assert!(document.discount(DiscountScope::Total, TaxMode::Excl).is_none());
}
