//! Local order history submitter.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{Timestamp, Zoned};
use portal::prelude::{Cart, Order};

use crate::{
    domain::orders::{
        errors::SubmissionError,
        submitters::{OrderConfirmation, OrderSubmitter},
    },
    store::{KeyValueStore, read_orders, write_orders},
};

/// Records orders in the persisted order history, newest first.
#[derive(Clone)]
pub struct LocalOrderSubmitter {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for LocalOrderSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalOrderSubmitter").finish_non_exhaustive()
    }
}

impl LocalOrderSubmitter {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderSubmitter for LocalOrderSubmitter {
    #[tracing::instrument(
        name = "orders.local.submit",
        skip(self, cart),
        fields(order_id = tracing::field::Empty),
        err
    )]
    async fn submit(&self, cart: &Cart) -> Result<OrderConfirmation, SubmissionError> {
        let mut orders = read_orders(self.store.as_ref())?;

        let order = Order::from_cart(
            Order::next_local_id(Timestamp::now(), &orders),
            Zoned::now().date(),
            cart,
        )?;

        orders.insert(0, order.clone());
        write_orders(self.store.as_ref(), &orders)?;

        tracing::Span::current().record("order_id", order.id());

        Ok(OrderConfirmation {
            order_id: order.id().to_string(),
            order: Some(order),
        })
    }
}

#[cfg(test)]
mod tests {
    use portal::prelude::OrderStatus;
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::{store::MemoryStore, test::helpers::product};

    use super::*;

    #[tokio::test]
    async fn submit_prepends_processing_order() -> TestResult {
        let store = Arc::new(MemoryStore::new());
        let submitter = LocalOrderSubmitter::new(store.clone());

        let mut cart = Cart::new();
        cart.add_or_increment(&product("A", dec!(420), dec!(450), 50), None)?;
        let first = submitter.submit(&cart).await?;

        cart.add_or_increment(&product("B", dec!(65), dec!(70), 100), None)?;
        let second = submitter.submit(&cart).await?;

        let history = read_orders(store.as_ref())?;
        let ids: Vec<&str> = history.iter().map(Order::id).collect();

        assert_eq!(ids.len(), 2);
        assert_ne!(first.order_id, second.order_id);
        assert_eq!(ids.first().copied(), Some(second.order_id.as_str()));
        assert_eq!(ids.last().copied(), Some(first.order_id.as_str()));
        assert!(first.order_id.starts_with("ORD-"));
        assert_eq!(
            history.first().map(Order::status),
            Some(OrderStatus::Processing)
        );

        Ok(())
    }

    #[tokio::test]
    async fn orders_placed_back_to_back_get_distinct_ids() -> TestResult {
        let store = Arc::new(MemoryStore::new());
        let submitter = LocalOrderSubmitter::new(store.clone());

        let mut cart = Cart::new();
        cart.add_or_increment(&product("A", dec!(420), dec!(450), 50), None)?;

        for _ in 0..5 {
            submitter.submit(&cart).await?;
        }

        let history = read_orders(store.as_ref())?;
        let mut ids: Vec<&str> = history.iter().map(Order::id).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 5);

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_appends_nothing() -> TestResult {
        let store = Arc::new(MemoryStore::new());
        let submitter = LocalOrderSubmitter::new(store.clone());

        let result = submitter.submit(&Cart::new()).await;

        assert!(matches!(result, Err(SubmissionError::EmptyCart)));
        assert!(read_orders(store.as_ref())?.is_empty());

        Ok(())
    }
}
