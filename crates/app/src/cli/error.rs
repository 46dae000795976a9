//! Command failures.

use std::fmt::Display;

use portal_app::{
    catalog::CatalogError,
    domain::{
        carts::CartsServiceError, orders::OrdersServiceError, templates::TemplatesServiceError,
    },
};
use thiserror::Error;

/// Exit status for requests the portal refused as invalid.
const REJECTED_STATUS: u8 = 2;

/// Exit status for every other failure.
const FAILED_STATUS: u8 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    /// The request was refused; repeating it unchanged fails the same way.
    #[error("{0}")]
    Rejected(String),

    #[error("error: {0}")]
    Failed(String),
}

impl CommandError {
    /// Classify a service error, prefixing `context` onto failures that are
    /// not the user's to correct.
    pub(crate) fn from_service(error: &impl ServiceFailure, context: Option<&str>) -> Self {
        if error.is_validation() {
            return Self::Rejected(error.to_string());
        }

        match context {
            Some(context) => Self::Failed(format!("{context}: {error}")),
            None => Self::Failed(error.to_string()),
        }
    }

    pub(crate) fn exit_status(&self) -> u8 {
        match self {
            Self::Rejected(_) => REJECTED_STATUS,
            Self::Failed(_) => FAILED_STATUS,
        }
    }
}

/// `map_err` adapter for service calls.
pub(crate) fn failed<E: ServiceFailure>(context: &'static str) -> impl FnOnce(E) -> CommandError {
    move |error| CommandError::from_service(&error, Some(context))
}

/// Service errors that know whether they are validation failures.
pub(crate) trait ServiceFailure: Display {
    fn is_validation(&self) -> bool;
}

impl ServiceFailure for CartsServiceError {
    fn is_validation(&self) -> bool {
        CartsServiceError::is_validation(self)
    }
}

impl ServiceFailure for TemplatesServiceError {
    fn is_validation(&self) -> bool {
        TemplatesServiceError::is_validation(self)
    }
}

impl ServiceFailure for OrdersServiceError {
    fn is_validation(&self) -> bool {
        OrdersServiceError::is_validation(self)
    }
}

impl ServiceFailure for CatalogError {
    fn is_validation(&self) -> bool {
        CatalogError::is_validation(self)
    }
}

#[cfg(test)]
mod tests {
    use portal_app::{crm::CrmError, domain::orders::SubmissionError, store::StoreError};

    use super::*;

    #[test]
    fn validation_errors_are_rejections_without_context() {
        let error =
            failed("failed to set quantity")(CartsServiceError::BelowMinimum { minimum: 50 });

        assert_eq!(
            error,
            CommandError::Rejected("minimum order quantity is 50".to_string())
        );
        assert_eq!(error.exit_status(), REJECTED_STATUS);
    }

    #[test]
    fn rename_to_blank_is_rejected_with_name_required() {
        let error =
            failed("failed to rename template")(TemplatesServiceError::RenameNameRequired);

        assert_eq!(error.to_string(), "Name Required");
    }

    #[test]
    fn store_failures_keep_context() {
        let error =
            failed("failed to load cart")(CartsServiceError::Store(StoreError::Poisoned));

        assert_eq!(
            error,
            CommandError::Failed("failed to load cart: storage error".to_string())
        );
        assert_eq!(error.exit_status(), FAILED_STATUS);
    }

    #[test]
    fn unavailable_order_reports_generic_message() {
        let error = CommandError::from_service(
            &OrdersServiceError::Submission(SubmissionError::Unavailable(
                CrmError::UnexpectedResponse("order request failed with status 503".to_string()),
            )),
            None,
        );

        assert_eq!(
            error.to_string(),
            "error: Failed to place order. Please try again later."
        );
    }

    #[test]
    fn empty_cart_order_is_rejected() {
        let error = CommandError::from_service(&OrdersServiceError::EmptyCart, None);

        assert_eq!(error, CommandError::Rejected("Empty Cart".to_string()));
    }
}
