use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::traits::ReadRepository;
use crate::core::ResolutionError;
use crate::modules::orders::models::Order;
use crate::modules::orders::repositories::OrderRepository;

/// Finds the order a document should read customer-facing fields from
///
/// Standard orders are their own origin. Refunds resolve to their parent,
/// exactly one hop; a parent that is itself a refund is rejected.
#[derive(Clone)]
pub struct OrderResolver {
    orders: Arc<dyn OrderRepository>,
}

impl OrderResolver {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// Whether the order is a refund record
    pub fn is_refund(&self, order: &Order) -> bool {
        order.is_refund()
    }

    /// Parent reference of a refund; `None` for standard orders
    pub fn refund_parent_id(&self, order: &Order) -> Option<i64> {
        if order.is_refund() {
            order.parent_id
        } else {
            None
        }
    }

    /// Resolve the origin order
    ///
    /// # Errors
    /// Returns `ResolutionError` when a refund has no parent reference, the
    /// parent cannot be loaded, or the parent is itself a refund.
    pub async fn resolve_origin<'a>(
        &self,
        order: &'a Order,
    ) -> Result<Cow<'a, Order>, ResolutionError> {
        if !order.is_refund() {
            return Ok(Cow::Borrowed(order));
        }

        let refund_id = order.id;
        let parent_id = order.parent_id.ok_or_else(|| {
            warn!(refund_id, "Refund has no parent reference");
            ResolutionError::MissingParent { refund_id }
        })?;

        let parent = self
            .orders
            .find_by_id(parent_id)
            .await
            .map_err(|e| {
                warn!(refund_id, parent_id, error = %e, "Failed to load refund parent");
                ResolutionError::Lookup {
                    parent_id,
                    message: e.to_string(),
                }
            })?
            .ok_or_else(|| {
                warn!(refund_id, parent_id, "Refund parent not found");
                ResolutionError::ParentNotFound {
                    refund_id,
                    parent_id,
                }
            })?;

        if parent.is_refund() {
            warn!(refund_id, parent_id, "Refund parent is itself a refund");
            return Err(ResolutionError::NestedRefund {
                refund_id,
                parent_id,
            });
        }

        debug!(refund_id, parent_id, "Resolved refund to parent order");
        Ok(Cow::Owned(parent))
    }
}
