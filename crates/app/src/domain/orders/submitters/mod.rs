//! Order submission strategies.

use async_trait::async_trait;
use mockall::automock;
use portal::prelude::{Cart, Order};

use crate::domain::orders::errors::SubmissionError;

mod local;
mod remote;

pub use local::LocalOrderSubmitter;
pub use remote::RemoteOrderSubmitter;

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Order id, local or assigned by the order system.
    pub order_id: String,

    /// The recorded order, when the strategy keeps a local copy.
    pub order: Option<Order>,
}

#[automock]
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Submit the contents of `cart` as an order.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::EmptyCart`] for an empty cart, a rejection
    /// carrying the order system's message, or a transport failure.
    async fn submit(&self, cart: &Cart) -> Result<OrderConfirmation, SubmissionError>;
}
