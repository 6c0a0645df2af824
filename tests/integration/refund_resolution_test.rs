// Integration tests for refund origin resolution
//
// Covers the one-hop parent lookup, its failure modes and how documents
// built for refunds surface them.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use helpers::*;
use order_documents::config::DocumentSettings;
use order_documents::core::traits::ReadRepository;
use order_documents::core::{AppError, Currency, ResolutionError, Result};
use order_documents::orders::{Order, OrderResolver};

struct UnavailableRepository;

#[async_trait]
impl ReadRepository<Order, i64> for UnavailableRepository {
    async fn find_by_id(&self, _id: i64) -> Result<Option<Order>> {
        Err(AppError::internal("order store offline"))
    }
}

fn resolver(orders: Vec<Order>) -> OrderResolver {
    OrderResolver::new(TestDataFactory::order_repository(orders))
}

#[tokio::test]
async fn test_standard_order_is_its_own_origin() {
    let order = TestDataFactory::paid_order();
    let origin = resolver(vec![]).resolve_origin(&order).await.unwrap();

    assert!(matches!(origin, Cow::Borrowed(_)));
    assert_eq!(origin.id, PARENT_ID);
}

#[tokio::test]
async fn test_refund_resolves_to_parent() {
    let resolver = resolver(vec![TestDataFactory::paid_order(), TestDataFactory::refund()]);
    let refund = TestDataFactory::refund();

    let origin = resolver.resolve_origin(&refund).await.unwrap();
    assert_eq!(origin.id, PARENT_ID);
    assert!(!origin.is_refund());

    // resolving the origin again is a no-op
    let again = resolver.resolve_origin(&origin).await.unwrap();
    assert_eq!(again.id, origin.id);
}

#[tokio::test]
async fn test_refund_without_parent_reference() {
    let mut refund = TestDataFactory::refund();
    refund.parent_id = None;

    let err = resolver(vec![]).resolve_origin(&refund).await.unwrap_err();
    assert_eq!(err, ResolutionError::MissingParent { refund_id: REFUND_ID });
}

#[tokio::test]
async fn test_refund_with_unknown_parent() {
    let err = resolver(vec![])
        .resolve_origin(&TestDataFactory::refund())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ResolutionError::ParentNotFound {
            refund_id: REFUND_ID,
            parent_id: PARENT_ID,
        }
    );
}

#[tokio::test]
async fn test_refund_of_refund_is_rejected() {
    let first = TestDataFactory::refund();
    let second = Order::refund(1002, REFUND_ID, Currency::USD, Utc::now());

    let err = resolver(vec![first]).resolve_origin(&second).await.unwrap_err();
    assert_eq!(
        err,
        ResolutionError::NestedRefund {
            refund_id: 1002,
            parent_id: REFUND_ID,
        }
    );
}

#[tokio::test]
async fn test_repository_failure_is_reported() {
    let resolver = OrderResolver::new(Arc::new(UnavailableRepository));
    let err = resolver
        .resolve_origin(&TestDataFactory::refund())
        .await
        .unwrap_err();

    match err {
        ResolutionError::Lookup { parent_id, message } => {
            assert_eq!(parent_id, PARENT_ID);
            assert!(message.contains("order store offline"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_refund_document_reads_parent_data() {
    let document =
        TestDataFactory::document(TestDataFactory::refund(), DocumentSettings::default());

    assert!(document.is_refund());
    assert_eq!(document.order_number().await.unwrap(), "1000");
    assert_eq!(document.invoice_number().await.unwrap(), "INV-2025-0042");
    assert_eq!(document.order_date().await.unwrap(), "June 1, 2025");
    assert_eq!(document.billing_email().await.unwrap(), "grace@example.com");
    assert_eq!(document.payment_method().await.unwrap(), "Credit card");
    assert_eq!(document.shipping_notes(), "Damaged in transit");
}

#[tokio::test]
async fn test_orphan_refund_document_fails_loudly() {
    let mut refund = TestDataFactory::refund();
    refund.parent_id = Some(424242);
    let document = TestDataFactory::document(refund, DocumentSettings::default());

    let err = document.view().await.unwrap_err();
    assert!(err.is_resolution());
    assert!(document.billing_address().await.is_err());
    assert!(document.order_number().await.is_err());
}
