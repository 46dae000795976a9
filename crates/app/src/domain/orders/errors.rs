//! Order errors.

use portal::prelude::OrderError;
use thiserror::Error;

use crate::{crm::CrmError, domain::carts::CartsServiceError, store::StoreError};

/// Message shown for any transport-level submission failure.
pub const UNAVAILABLE_MESSAGE: &str = "Failed to place order. Please try again later.";

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Empty Cart")]
    EmptyCart,

    /// The order system answered but declined the order.
    #[error("{0}")]
    Rejected(String),

    #[error("{}", UNAVAILABLE_MESSAGE)]
    Unavailable(#[source] CrmError),

    #[error("invalid order")]
    InvalidOrder(#[source] OrderError),

    #[error("storage error")]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// Whether the error is a user-facing validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyCart | Self::InvalidOrder(_))
    }
}

impl From<OrderError> for SubmissionError {
    fn from(error: OrderError) -> Self {
        match error {
            OrderError::EmptyCart => Self::EmptyCart,
            OrderError::MissingId | OrderError::TotalsMismatch(_) | OrderError::InvalidItem(_) => {
                Self::InvalidOrder(error)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("Empty Cart")]
    EmptyCart,

    #[error(transparent)]
    Submission(SubmissionError),

    #[error(transparent)]
    Cart(#[from] CartsServiceError),

    #[error("storage error")]
    Store(#[from] StoreError),
}

impl OrdersServiceError {
    /// Whether the error is a user-facing validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::EmptyCart => true,
            Self::Submission(error) => error.is_validation(),
            Self::Cart(error) => error.is_validation(),
            Self::Store(_) => false,
        }
    }
}

impl From<SubmissionError> for OrdersServiceError {
    fn from(error: SubmissionError) -> Self {
        match error {
            SubmissionError::EmptyCart => Self::EmptyCart,
            other => Self::Submission(other),
        }
    }
}
