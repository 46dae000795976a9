//! Carts service.

use std::sync::Arc;

use mockall::automock;
use portal::prelude::*;

use crate::{
    domain::carts::errors::CartsServiceError,
    store::{KeyValueStore, read_cart, write_cart},
};

#[derive(Clone)]
pub struct StoreCartsService {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for StoreCartsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCartsService").finish_non_exhaustive()
    }
}

impl StoreCartsService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the cart, apply `change` and persist the result.
    ///
    /// Nothing is written when `change` fails.
    fn update<T>(
        &self,
        change: impl FnOnce(&mut Cart) -> Result<T, CartError>,
    ) -> Result<T, CartsServiceError> {
        let mut cart = read_cart(self.store.as_ref())?;

        let outcome = change(&mut cart)?;

        write_cart(self.store.as_ref(), &cart)?;

        Ok(outcome)
    }
}

impl CartsService for StoreCartsService {
    fn cart(&self) -> Result<Cart, CartsServiceError> {
        Ok(read_cart(self.store.as_ref())?)
    }

    fn totals(&self) -> Result<CartTotals, CartsServiceError> {
        Ok(self.cart()?.totals())
    }

    #[tracing::instrument(
        name = "carts.service.add_product",
        skip(self, product),
        fields(product_id = %product.id),
        err
    )]
    fn add_product(
        &self,
        product: &Product,
        quantity: Option<u32>,
    ) -> Result<u32, CartsServiceError> {
        let quantity = self.update(|cart| cart.add_or_increment(product, quantity))?;

        tracing::info!(product_id = %product.id, quantity, "added product to cart");

        Ok(quantity)
    }

    #[tracing::instrument(name = "carts.service.set_quantity", skip(self), fields(product_id = %id), err)]
    fn set_quantity(&self, id: &ProductId, quantity: u32) -> Result<u32, CartsServiceError> {
        let quantity = self.update(|cart| cart.set_quantity(id, quantity))?;

        tracing::info!(product_id = %id, quantity, "set cart quantity");

        Ok(quantity)
    }

    #[tracing::instrument(name = "carts.service.increment", skip(self), fields(product_id = %id), err)]
    fn increment(&self, id: &ProductId) -> Result<u32, CartsServiceError> {
        self.update(|cart| cart.increment(id))
    }

    #[tracing::instrument(name = "carts.service.decrement", skip(self), fields(product_id = %id), err)]
    fn decrement(&self, id: &ProductId) -> Result<QuantityChange, CartsServiceError> {
        self.update(|cart| cart.decrement(id))
    }

    #[tracing::instrument(name = "carts.service.remove_item", skip(self), fields(product_id = %id), err)]
    fn remove_item(&self, id: &ProductId) -> Result<LineItem, CartsServiceError> {
        let removed = self.update(|cart| cart.remove(id))?;

        tracing::info!(product_id = %id, "removed item from cart");

        Ok(removed)
    }

    #[tracing::instrument(name = "carts.service.clear", skip(self), err)]
    fn clear(&self) -> Result<(), CartsServiceError> {
        write_cart(self.store.as_ref(), &Cart::new())?;

        tracing::info!("cleared cart");

        Ok(())
    }

    #[tracing::instrument(
        name = "carts.service.merge_items",
        skip(self, items),
        fields(item_count = items.len()),
        err
    )]
    fn merge_items(&self, items: &[LineItem]) -> Result<Cart, CartsServiceError> {
        self.update(|cart| {
            cart.merge(items)?;

            Ok(cart.clone())
        })
    }
}

#[automock]
pub trait CartsService: Send + Sync {
    /// Current cart contents.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn cart(&self) -> Result<Cart, CartsServiceError>;

    /// Derived totals of the current cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn totals(&self) -> Result<CartTotals, CartsServiceError>;

    /// Add a product, or increase its quantity. `quantity` defaults to the
    /// product's minimum order quantity. Returns the resulting quantity.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero quantity, a new item below its
    /// minimum, or an overflowing quantity.
    fn add_product(
        &self,
        product: &Product,
        quantity: Option<u32>,
    ) -> Result<u32, CartsServiceError>;

    /// Overwrite an item's quantity. Use [`CartsService::remove_item`] to
    /// drop an item.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::NotFound`] or
    /// [`CartsServiceError::BelowMinimum`], zero included; the cart is
    /// unchanged on error.
    fn set_quantity(&self, id: &ProductId, quantity: u32) -> Result<u32, CartsServiceError>;

    /// Step an item up by its minimum order quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::NotFound`] for an unknown item.
    fn increment(&self, id: &ProductId) -> Result<u32, CartsServiceError>;

    /// Step an item down by its minimum order quantity, removing it once it
    /// would fall below that minimum.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::NotFound`] for an unknown item.
    fn decrement(&self, id: &ProductId) -> Result<QuantityChange, CartsServiceError>;

    /// Remove an item from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::NotFound`] for an unknown item.
    fn remove_item(&self, id: &ProductId) -> Result<LineItem, CartsServiceError>;

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    fn clear(&self) -> Result<(), CartsServiceError>;

    /// Merge items into the cart, adding quantities by product id.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the cart unchanged if any item cannot be
    /// merged.
    fn merge_items(&self, items: &[LineItem]) -> Result<Cart, CartsServiceError>;
}
