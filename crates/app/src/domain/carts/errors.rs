//! Carts service errors.

use portal::prelude::CartError;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("item not found in cart")]
    NotFound,

    #[error("minimum order quantity is {minimum}")]
    BelowMinimum { minimum: u32 },

    #[error("quantity must be greater than zero")]
    ZeroQuantity,

    #[error("quantity is too large")]
    QuantityOverflow,

    #[error("invalid cart data")]
    InvalidData(#[source] CartError),

    #[error("storage error")]
    Store(#[from] StoreError),
}

impl CartsServiceError {
    /// Whether the error is a user-facing validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::BelowMinimum { .. }
                | Self::ZeroQuantity
                | Self::QuantityOverflow
                | Self::InvalidData(_)
        )
    }
}

impl From<CartError> for CartsServiceError {
    fn from(error: CartError) -> Self {
        match error {
            CartError::NotFound(_) => Self::NotFound,
            CartError::BelowMinimum { minimum, .. } => Self::BelowMinimum { minimum },
            CartError::ZeroQuantity => Self::ZeroQuantity,
            CartError::QuantityOverflow(_) => Self::QuantityOverflow,
            CartError::DuplicateItem(_) | CartError::InvalidItem(_) => Self::InvalidData(error),
        }
    }
}
