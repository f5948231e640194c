//! The single current-order slot shared by the screens.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::Order;

/// Persistence for the one current order. Saving overwrites; last write wins.
pub trait OrderStore: Send + Sync {
    fn save(&self, order: Order);

    /// The last saved order, or the empty order before any save.
    fn get(&self) -> Order;
}

/// Process-local order slot. Clones share the same slot.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn save(&self, order: Order) {
        tracing::info!(
            total_price = %order.total_price,
            item_count = order.items.len(),
            "Order saved"
        );
        *self.inner.write() = order;
    }

    fn get(&self) -> Order {
        self.inner.read().clone()
    }
}
