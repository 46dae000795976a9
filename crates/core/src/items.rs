//! Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Reasons a line item is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// The item has no product id.
    #[error("line item is missing a product id")]
    MissingId,

    /// The item quantity is zero.
    #[error("line item {0} has a zero quantity")]
    ZeroQuantity(ProductId),

    /// The item minimum order quantity is zero.
    #[error("line item {0} has a zero minimum order quantity")]
    ZeroMinimum(ProductId),

    /// The item carries a negative price.
    #[error("line item {0} has a negative price")]
    NegativePrice(ProductId),
}

/// One product and its requested quantity in a cart, template or order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product id, unique within a cart
    pub id: ProductId,

    /// Product name at the time it was added
    pub name: String,

    /// Selling price per unit
    pub unit_price: Decimal,

    /// Reference (MRP) price per unit
    pub list_price: Decimal,

    /// Requested quantity
    pub quantity: u32,

    /// Unit of sale
    pub unit: String,

    /// Smallest quantity that may be ordered
    pub min_order_quantity: u32,

    /// Promotion labels, display only
    #[serde(default)]
    pub promotions: Vec<String>,
}

impl LineItem {
    /// Create a line item for `quantity` units of a catalog product.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            list_price: product.list_price,
            quantity,
            unit: product.unit.clone(),
            min_order_quantity: product.min_order_quantity,
            promotions: product.promotions.clone(),
        }
    }

    /// Selling price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// List price times quantity.
    pub fn list_line_total(&self) -> Decimal {
        self.list_price * Decimal::from(self.quantity)
    }

    /// Check the item's structural invariants.
    ///
    /// # Errors
    ///
    /// Returns an [`ItemError`] naming the first violated invariant.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.id.is_blank() {
            return Err(ItemError::MissingId);
        }

        if self.quantity == 0 {
            return Err(ItemError::ZeroQuantity(self.id.clone()));
        }

        if self.min_order_quantity == 0 {
            return Err(ItemError::ZeroMinimum(self.id.clone()));
        }

        if self.unit_price.is_sign_negative() || self.list_price.is_sign_negative() {
            return Err(ItemError::NegativePrice(self.id.clone()));
        }

        Ok(())
    }
}
