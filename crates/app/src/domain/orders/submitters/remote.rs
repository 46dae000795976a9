//! CRM order submitter.

use async_trait::async_trait;
use portal::prelude::{Cart, order_lines};

use crate::{
    crm::{CrmClient, CrmError},
    domain::orders::{
        errors::SubmissionError,
        submitters::{OrderConfirmation, OrderSubmitter},
    },
};

const DEFAULT_REJECTION: &str = "Order was not accepted";

/// Places orders with the CRM: a token exchange followed by order creation.
#[derive(Debug, Clone)]
pub struct RemoteOrderSubmitter {
    client: CrmClient,
}

impl RemoteOrderSubmitter {
    #[must_use]
    pub fn new(client: CrmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderSubmitter for RemoteOrderSubmitter {
    #[tracing::instrument(
        name = "orders.remote.submit",
        skip(self, cart),
        fields(item_count = cart.len()),
        err
    )]
    async fn submit(&self, cart: &Cart) -> Result<OrderConfirmation, SubmissionError> {
        if cart.is_empty() {
            return Err(SubmissionError::EmptyCart);
        }

        let token = self
            .client
            .access_token()
            .await
            .map_err(SubmissionError::Unavailable)?;

        let response = self
            .client
            .create_order(&token, &order_lines(cart))
            .await
            .map_err(SubmissionError::Unavailable)?;

        if !response.success {
            let message = response
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION.to_string());

            tracing::warn!(%message, "order rejected by CRM");

            return Err(SubmissionError::Rejected(message));
        }

        let order_id = response
            .order_number
            .filter(|number| !number.trim().is_empty())
            .ok_or_else(|| {
                SubmissionError::Unavailable(CrmError::UnexpectedResponse(
                    "order accepted without an order number".to_string(),
                ))
            })?;

        tracing::info!(%order_id, "order placed with CRM");

        Ok(OrderConfirmation {
            order_id,
            order: None,
        })
    }
}
