//! Orders

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::Cart,
    items::{ItemError, LineItem},
    products::ProductId,
};

/// Errors raised while building or reading orders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Orders cannot be placed from an empty cart.
    #[error("Empty Cart")]
    EmptyCart,

    /// The order has no id.
    #[error("order id is required")]
    MissingId,

    /// Stored totals are inconsistent.
    #[error("order {0} totals do not add up")]
    TotalsMismatch(String),

    /// A stored order item is malformed.
    #[error(transparent)]
    InvalidItem(#[from] ItemError),
}

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Awaiting confirmation
    Pending,

    /// Accepted and being prepared
    #[default]
    Processing,

    /// Dispatched
    Shipped,

    /// Received by the distributor
    Delivered,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        })
    }
}

/// A placed order. Items and totals are frozen at placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    date: Date,
    items: Vec<LineItem>,
    subtotal: Decimal,
    tax: Decimal,
    total: Decimal,
    status: OrderStatus,
}

impl Order {
    /// Build an order from the current contents of `cart`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] or [`OrderError::MissingId`].
    pub fn from_cart(id: impl Into<String>, date: Date, cart: &Cart) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let id = id.into();

        if id.trim().is_empty() {
            return Err(OrderError::MissingId);
        }

        let totals = cart.totals();

        Ok(Self {
            id,
            date,
            items: cart.items().to_vec(),
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            status: OrderStatus::Processing,
        })
    }

    /// Locally generated order id derived from a timestamp.
    pub fn local_id(at: Timestamp) -> String {
        format!("ORD-{}", at.as_millisecond())
    }

    /// [`Order::local_id`] for `at`, with a `-<n>` suffix when `history`
    /// already holds an order placed in the same millisecond.
    pub fn next_local_id(at: Timestamp, history: &[Order]) -> String {
        let base = Self::local_id(at);
        let taken = |id: &str| history.iter().any(|order| order.id == id);

        let mut id = base.clone();
        let mut sequence = 1u32;

        while taken(&id) {
            sequence += 1;
            id = format!("{base}-{sequence}");
        }

        id
    }

    /// Order id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Placement date
    pub fn date(&self) -> Date {
        self.date
    }

    /// Items as they were when the order was placed
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Subtotal at placement
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Tax at placement
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Total at placement
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Fulfilment status
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Check invariants of an order read back from storage.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError`] naming the first violated invariant.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.id.trim().is_empty() {
            return Err(OrderError::MissingId);
        }

        if self.subtotal + self.tax != self.total {
            return Err(OrderError::TotalsMismatch(self.id.clone()));
        }

        self.items.iter().try_for_each(LineItem::validate)?;

        Ok(())
    }
}

/// A product and quantity, as sent to an external order system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Product id
    pub product_id: ProductId,

    /// Ordered quantity
    pub quantity: u32,
}

/// Product and quantity pairs for every item in `cart`.
pub fn order_lines(cart: &Cart) -> Vec<OrderLine> {
    cart.items()
        .iter()
        .map(|item| OrderLine {
            product_id: item.id.clone(),
            quantity: item.quantity,
        })
        .collect()
}
