//! Orders

pub mod errors;
pub mod service;
pub mod submitters;

pub use errors::{OrdersServiceError, SubmissionError};
pub use service::*;
pub use submitters::{
    LocalOrderSubmitter, MockOrderSubmitter, OrderConfirmation, OrderSubmitter,
    RemoteOrderSubmitter,
};
