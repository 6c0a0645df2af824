// Integration tests for the document totals table and grand totals

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use chrono::Utc;
use rust_decimal_macros::dec;

use helpers::*;
use order_documents::config::{DocumentSettings, TaxMode, TaxTotalDisplay};
use order_documents::core::Currency;
use order_documents::orders::models::{FeeLine, RefundSummary};
use order_documents::orders::Order;
use order_documents::platform::LegacyPlatform;

fn inclusive() -> DocumentSettings {
    DocumentSettings {
        tax_display: TaxMode::Incl,
        ..Default::default()
    }
}

#[test]
fn test_grand_total_exclusive_and_inclusive() {
    let document =
        TestDataFactory::document(TestDataFactory::paid_order(), DocumentSettings::default());

    let excl = document.grand_total(TaxMode::Excl);
    assert_eq!(excl.label, "Total ex. tax");
    assert_eq!(excl.value, "$100.00");

    let incl = document.grand_total(TaxMode::Incl);
    assert_eq!(incl.label, "Total");
    assert_eq!(incl.value, "$110.00");
}

#[test]
fn test_grand_total_hook() {
    let mut hooks = order_documents::documents::DocumentHooks::default();
    hooks.grand_total.register(|mut total, order| {
        total.label = format!("{} (order {})", total.label, order.id);
        total
    });
    let document =
        TestDataFactory::document(TestDataFactory::paid_order(), DocumentSettings::default())
            .with_hooks(hooks);
    assert_eq!(document.grand_total(TaxMode::Incl).label, "Total (order 1000)");
}

#[test]
fn test_exclusive_totals_table() {
    let mut order = TestDataFactory::paid_order();
    order.refunds.push(RefundSummary {
        id: REFUND_ID,
        amount: dec!(22.00),
        reason: Some("Damaged in transit".into()),
    });
    let document = TestDataFactory::document(order, DocumentSettings::default());

    let raw = document.raw_totals();
    assert_eq!(raw.get("cart_subtotal").unwrap().label, "Subtotal:");
    assert!(raw.get("refund_0").is_some());

    let totals = document.aggregate_totals();
    assert_eq!(
        totals.keys(),
        vec![
            "cart_subtotal",
            "discount",
            "shipping",
            "us-va-sales-1",
            "payment_method",
            "order_total"
        ]
    );
    assert_eq!(totals.get("cart_subtotal").unwrap().label, "Subtotal");
    assert_eq!(totals.get("discount").unwrap().value, "-$10.00");
    assert_eq!(totals.get("shipping").unwrap().value, "$10.00 via Flat rate");
    assert_eq!(totals.get("us-va-sales-1").unwrap().label, "Sales tax");
    assert_eq!(totals.get("us-va-sales-1").unwrap().value, "$10.00");
    assert_eq!(totals.get("order_total").unwrap().value, "$110.00");
}

#[test]
fn test_inclusive_totals_table_lists_included_tax() {
    let document = TestDataFactory::document(TestDataFactory::paid_order(), inclusive());
    let totals = document.aggregate_totals();

    assert!(totals.get("us-va-sales-1").is_none());
    assert_eq!(totals.get("cart_subtotal").unwrap().value, "$110.00");
    assert_eq!(
        totals.get("order_total").unwrap().value,
        "$110.00 (includes $10.00 Sales tax)"
    );
}

#[test]
fn test_inclusive_single_tax_total_on_legacy_platform() {
    let mut order = TestDataFactory::paid_order();
    order.total_tax_refunded = dec!(2.00);
    let settings = DocumentSettings {
        tax_total_display: TaxTotalDisplay::Single,
        ..inclusive()
    };
    let document = TestDataFactory::document_on(order, Arc::new(LegacyPlatform), settings);

    assert_eq!(
        document.aggregate_totals().get("order_total").unwrap().value,
        "$110.00 (Includes $8.00 Tax)"
    );
}

#[test]
fn test_tax_disabled_skips_tax_rows_and_note() {
    let settings = DocumentSettings {
        tax_enabled: false,
        ..inclusive()
    };
    let document = TestDataFactory::document(TestDataFactory::paid_order(), settings);
    assert_eq!(document.aggregate_totals().get("order_total").unwrap().value, "$110.00");
}

#[test]
fn test_refund_totals_keep_refund_rows() {
    let mut refund = TestDataFactory::refund();
    refund.refunds.push(RefundSummary {
        id: REFUND_ID,
        amount: dec!(22.00),
        reason: None,
    });
    let document = TestDataFactory::document(refund, DocumentSettings::default());
    let totals = document.aggregate_totals();

    assert_eq!(totals.get("refund_0").unwrap().value, "-$22.00");
    assert_eq!(totals.get("order_total").unwrap().value, "-$22.00");
}

#[test]
fn test_fee_rows() {
    let mut order = Order::new(9, Currency::GBP, Utc::now());
    order.fees.push(FeeLine {
        id: 3,
        name: "Handling".into(),
        total: dec!(1.50),
        tax: dec!(0.30),
    });
    order.total = dec!(1.80);
    let document = TestDataFactory::document(order, DocumentSettings::default());

    let fees = document.fees(TaxMode::Excl).unwrap();
    assert_eq!(fees.len(), 1);
    assert_eq!(fees[0].label, "Handling");
    assert_eq!(fees[0].value, "£1.50");

    let totals = document.aggregate_totals();
    assert_eq!(totals.get("fee_3").unwrap().label, "Handling");
}

#[tokio::test]
async fn test_tax_rows_use_registry_rates() {
    let document =
        TestDataFactory::document(TestDataFactory::paid_order(), DocumentSettings::default());
    let taxes = document.taxes().await.unwrap();

    assert_eq!(taxes.len(), 1);
    assert_eq!(taxes[0].label, "Sales tax");
    assert_eq!(taxes[0].value, "$10.00");
    assert_eq!(taxes[0].tax_amount, dec!(9.00));
    assert_eq!(taxes[0].shipping_tax_amount, dec!(1.00));
    assert_eq!(taxes[0].rate, "10%");
}

#[test]
fn test_subtotal_and_shipping_rows() {
    let document =
        TestDataFactory::document(TestDataFactory::paid_order(), DocumentSettings::default());

    assert_eq!(document.subtotal(TaxMode::Excl).value, "$100.00");
    assert_eq!(document.subtotal(TaxMode::Incl).value, "$110.00");

    let shipping = document.shipping(TaxMode::Incl);
    assert_eq!(shipping.label, "Shipping");
    assert_eq!(shipping.value, "$11.00");
    assert_eq!(shipping.tax, "$1.00");
}
