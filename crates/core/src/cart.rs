//! Cart

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    items::{ItemError, LineItem},
    pricing::{self, CartTotals},
    products::{Product, ProductId},
};

/// Errors raised by cart rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A zero quantity was requested for a new item.
    #[error("quantity must be greater than zero")]
    ZeroQuantity,

    /// The requested quantity is below the item's minimum order quantity.
    #[error("minimum order quantity for {item} is {minimum}, got {quantity}")]
    BelowMinimum {
        /// Item the quantity was requested for.
        item: ProductId,
        /// Requested quantity.
        quantity: u32,
        /// Minimum order quantity of the item.
        minimum: u32,
    },

    /// Adding to the item would overflow its quantity.
    #[error("quantity for {0} is too large")]
    QuantityOverflow(ProductId),

    /// The item is not in the cart.
    #[error("item {0} is not in the cart")]
    NotFound(ProductId),

    /// The same item appears more than once.
    #[error("item {0} appears more than once")]
    DuplicateItem(ProductId),

    /// A line item failed validation.
    #[error(transparent)]
    InvalidItem(#[from] ItemError),
}

impl CartError {
    /// Whether this error is a user-facing validation failure rather than a
    /// missing item.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

/// Observable cart state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    /// No items
    Empty,

    /// At least one item
    NonEmpty,
}

/// Result of changing an item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The item now has this quantity.
    Updated(u32),

    /// The item was removed from the cart.
    Removed,
}

/// Cart
///
/// An ordered set of line items, unique by product id. Every item holds at
/// least its minimum order quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart from previously stored items.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if an item is malformed, below its minimum, or
    /// duplicated.
    pub fn with_items(items: impl Into<Vec<LineItem>>) -> Result<Self, CartError> {
        let items = items.into();

        for (i, item) in items.iter().enumerate() {
            item.validate()?;

            if item.quantity < item.min_order_quantity {
                return Err(CartError::BelowMinimum {
                    item: item.id.clone(),
                    quantity: item.quantity,
                    minimum: item.min_order_quantity,
                });
            }

            if items.iter().take(i).any(|other| other.id == item.id) {
                return Err(CartError::DuplicateItem(item.id.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Consume the cart, returning its items.
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    /// Look up an item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current observable state.
    pub fn state(&self) -> CartState {
        if self.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Add a product, or increase its quantity if it is already in the cart.
    ///
    /// `quantity` defaults to the product's minimum order quantity. Returns the
    /// item's resulting quantity.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] for a zero quantity, a new item below its
    /// minimum, or a quantity overflow.
    pub fn add_or_increment(
        &mut self,
        product: &Product,
        quantity: Option<u32>,
    ) -> Result<u32, CartError> {
        let quantity = quantity.unwrap_or(product.min_order_quantity);

        self.add_line(LineItem::from_product(product, quantity))
    }

    /// Merge items into the cart, adding quantities for items already present.
    ///
    /// Either every item is merged or the cart is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first [`CartError`] raised while merging.
    pub fn merge(&mut self, items: &[LineItem]) -> Result<(), CartError> {
        let mut merged = self.clone();

        for item in items {
            merged.add_line(item.clone())?;
        }

        *self = merged;

        Ok(())
    }

    /// Overwrite an item's quantity. Removing an item goes through
    /// [`Cart::remove`]; no quantity passed here removes it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] for an unknown item, or
    /// [`CartError::BelowMinimum`] without changing anything when the quantity
    /// is below the item's minimum, zero included.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<u32, CartError> {
        let item = self.get_mut(id)?;

        if quantity < item.min_order_quantity {
            return Err(CartError::BelowMinimum {
                item: id.clone(),
                quantity,
                minimum: item.min_order_quantity,
            });
        }

        item.quantity = quantity;

        Ok(quantity)
    }

    /// Step an item's quantity up by its minimum order quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] or [`CartError::QuantityOverflow`].
    pub fn increment(&mut self, id: &ProductId) -> Result<u32, CartError> {
        let item = self.get_mut(id)?;

        item.quantity = item
            .quantity
            .checked_add(item.min_order_quantity)
            .ok_or_else(|| CartError::QuantityOverflow(id.clone()))?;

        Ok(item.quantity)
    }

    /// Step an item's quantity down by its minimum order quantity, removing it
    /// once it would fall below that minimum.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] for an unknown item.
    pub fn decrement(&mut self, id: &ProductId) -> Result<QuantityChange, CartError> {
        let item = self.get_mut(id)?;
        let stepped = item.quantity.saturating_sub(item.min_order_quantity);

        if stepped < item.min_order_quantity {
            self.remove(id)?;

            return Ok(QuantityChange::Removed);
        }

        item.quantity = stepped;

        Ok(QuantityChange::Updated(stepped))
    }

    /// Remove an item, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the item is not in the cart.
    pub fn remove(&mut self, id: &ProductId) -> Result<LineItem, CartError> {
        let position = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| CartError::NotFound(id.clone()))?;

        Ok(self.items.remove(position))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of selling price times quantity.
    pub fn subtotal(&self) -> Decimal {
        pricing::subtotal(&self.items)
    }

    /// Sum of list price times quantity.
    pub fn list_total(&self) -> Decimal {
        pricing::list_total(&self.items)
    }

    /// List total minus subtotal.
    pub fn savings(&self) -> Decimal {
        pricing::savings(&self.items)
    }

    /// Rounded tax on the subtotal.
    pub fn tax(&self) -> Decimal {
        pricing::tax(self.subtotal())
    }

    /// Subtotal plus tax.
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.tax()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        pricing::item_count(&self.items)
    }

    /// All totals at once.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_items(&self.items)
    }

    fn get_mut(&mut self, id: &ProductId) -> Result<&mut LineItem, CartError> {
        self.items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| CartError::NotFound(id.clone()))
    }

    fn add_line(&mut self, item: LineItem) -> Result<u32, CartError> {
        if item.quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or_else(|| CartError::QuantityOverflow(item.id.clone()))?;

            return Ok(existing.quantity);
        }

        item.validate()?;

        if item.quantity < item.min_order_quantity {
            return Err(CartError::BelowMinimum {
                item: item.id,
                quantity: item.quantity,
                minimum: item.min_order_quantity,
            });
        }

        let quantity = item.quantity;

        self.items.push(item);

        Ok(quantity)
    }
}
