//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use portal::prelude::Order;

use crate::{
    domain::{
        carts::CartsService,
        orders::{
            errors::OrdersServiceError,
            submitters::{OrderConfirmation, OrderSubmitter},
        },
    },
    store::{KeyValueStore, read_orders},
};

#[derive(Clone)]
pub struct PortalOrdersService {
    store: Arc<dyn KeyValueStore>,
    carts: Arc<dyn CartsService>,
    submitter: Arc<dyn OrderSubmitter>,
}

impl std::fmt::Debug for PortalOrdersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalOrdersService").finish_non_exhaustive()
    }
}

impl PortalOrdersService {
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        carts: Arc<dyn CartsService>,
        submitter: Arc<dyn OrderSubmitter>,
    ) -> Self {
        Self {
            store,
            carts,
            submitter,
        }
    }
}

#[async_trait]
impl OrdersService for PortalOrdersService {
    #[tracing::instrument(name = "orders.service.place_order", skip(self), err)]
    async fn place_order(&self) -> Result<OrderConfirmation, OrdersServiceError> {
        let cart = self.carts.cart()?;

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let confirmation = self.submitter.submit(&cart).await?;

        if let Err(error) = self.carts.clear() {
            tracing::warn!(
                order_id = %confirmation.order_id,
                %error,
                "order placed but the cart could not be cleared"
            );
        }

        tracing::info!(order_id = %confirmation.order_id, "placed order");

        Ok(confirmation)
    }

    async fn history(&self) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(read_orders(self.store.as_ref())?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Submit the current cart and clear it once the order is accepted.
    ///
    /// An accepted order is confirmed even if clearing the cart then fails;
    /// that failure is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::EmptyCart`] for an empty cart, or the
    /// submission failure; the cart is kept on any error.
    async fn place_order(&self) -> Result<OrderConfirmation, OrdersServiceError>;

    /// Placed orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    async fn history(&self) -> Result<Vec<Order>, OrdersServiceError>;
}
