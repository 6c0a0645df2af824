// Test Data Factory
//
// Builds orders, refunds and registries shared by several suites.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use order_documents::config::DocumentSettings;
use order_documents::core::Currency;
use order_documents::documents::OrderDocument;
use order_documents::orders::models::{Address, InvoiceRecord, LineItem, OrderTaxLine};
use order_documents::orders::services::OrderResolver;
use order_documents::orders::{InMemoryOrderRepository, Order};
use order_documents::platform::{CurrentPlatform, PlatformApi};
use order_documents::taxes::{InMemoryTaxRateRegistry, TaxRate};
use rust_decimal_macros::dec;

pub const PARENT_ID: i64 = 1000;
pub const REFUND_ID: i64 = 1001;

/// Test data factory for orders and collaborators
pub struct TestDataFactory;

impl TestDataFactory {
    pub fn billing_address() -> Address {
        Address {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            company: "Navy Yard".into(),
            address_1: "1 Main Street".into(),
            city: "Arlington".into(),
            state: "VA".into(),
            postcode: "22201".into(),
            country: "US".into(),
            email: "grace@example.com".into(),
            phone: "555-0100".into(),
            ..Default::default()
        }
    }

    /// Paid order: two lines, shipping, one tax line, 10.00 ex-tax discount
    pub fn paid_order() -> Order {
        let mut order = Order::new(
            PARENT_ID,
            Currency::USD,
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap(),
        );
        order.order_number = "#1000".into();
        order.billing = Self::billing_address();
        order.shipping = Self::billing_address();
        order.shipping.email.clear();
        order.shipping.phone.clear();
        order.payment_method_title = "Credit card".into();
        order.shipping_method = "Flat rate".into();

        order.items.push(
            LineItem::new(1, "Notebook", 2, dec!(20.00), dec!(18.00))
                .with_tax(dec!(2.00), dec!(1.80)),
        );
        order.items.push(
            LineItem::new(2, "Fountain pen", 1, dec!(80.00), dec!(72.00))
                .with_tax(dec!(8.00), dec!(7.20)),
        );

        order.subtotal = dec!(100.00);
        order.discount_total = dec!(10.00);
        order.discount_tax = dec!(1.00);
        order.shipping_total = dec!(10.00);
        order.shipping_tax = dec!(1.00);
        order.total_tax = dec!(10.00);
        order.total = dec!(110.00);

        order.tax_lines.push(OrderTaxLine {
            id: 50,
            rate_id: 1,
            rate_code: "US-VA-SALES-1".into(),
            label: "Sales tax".into(),
            tax_total: dec!(9.00),
            shipping_tax_total: dec!(1.00),
        });

        order.invoice = Some(InvoiceRecord {
            number: 42,
            formatted_number: "INV-2025-0042".into(),
            date: Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap(),
        });
        order
    }

    /// Refund against `paid_order`, carrying no customer data of its own
    pub fn refund() -> Order {
        let mut refund = Order::refund(
            REFUND_ID,
            PARENT_ID,
            Currency::USD,
            Utc.with_ymd_and_hms(2025, 6, 10, 15, 0, 0).unwrap(),
        );
        refund.total = dec!(-22.00);
        refund.total_tax = dec!(-2.00);
        refund.refund_reason = Some("Damaged in transit".into());
        refund
    }

    pub fn tax_rates() -> Vec<TaxRate> {
        vec![
            TaxRate::new(1, dec!(10.0000), "Sales tax", ""),
            TaxRate::new(2, dec!(5.5000), "Reduced", "reduced-rate"),
            TaxRate::new(3, dec!(0.0000), "Zero", "zero-rate"),
        ]
    }

    pub fn order_repository(orders: Vec<Order>) -> Arc<InMemoryOrderRepository> {
        Arc::new(InMemoryOrderRepository::from_orders(orders))
    }

    pub fn registry() -> Arc<InMemoryTaxRateRegistry> {
        Arc::new(InMemoryTaxRateRegistry::from_rates(Self::tax_rates()))
    }

    /// Document over the paid order and its refund
    pub fn document(order: Order, settings: DocumentSettings) -> OrderDocument {
        Self::document_on(order, Arc::new(CurrentPlatform), settings)
    }

    pub fn document_on(
        order: Order,
        platform: Arc<dyn PlatformApi>,
        settings: DocumentSettings,
    ) -> OrderDocument {
        let repo = Self::order_repository(vec![Self::paid_order(), Self::refund()]);
        OrderDocument::new(order, OrderResolver::new(repo), Self::registry(), platform, settings)
    }
}
