// Order lookups against the external order-management system.
//
// The crate only ever reads orders. `InMemoryOrderRepository` backs the
// preview CLI and the test suites; production callers implement
// `ReadRepository<Order, i64>` over their own store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::traits::ReadRepository;
use crate::core::Result;
use crate::modules::orders::models::Order;

/// Any read-only store of orders keyed by id
pub trait OrderRepository: ReadRepository<Order, i64> {}

impl<T> OrderRepository for T where T: ReadRepository<Order, i64> {}

/// Order store held in memory
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<i64, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let orders = orders.into_iter().map(|order| (order.id, order)).collect();
        Self {
            orders: RwLock::new(orders),
        }
    }

    /// Insert or replace an order
    pub async fn insert(&self, order: Order) {
        self.orders.write().await.insert(order.id, order);
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl ReadRepository<Order, i64> for InMemoryOrderRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }
}
