//! Templates service errors.

use portal::prelude::TemplateError;
use thiserror::Error;

use crate::{domain::carts::CartsServiceError, store::StoreError};

#[derive(Debug, Error)]
pub enum TemplatesServiceError {
    #[error("Empty Cart")]
    EmptyCart,

    #[error("Template Name Required")]
    NameRequired,

    #[error("Name Required")]
    RenameNameRequired,

    #[error("template not found")]
    NotFound,

    #[error("invalid template data")]
    InvalidData(#[source] TemplateError),

    #[error(transparent)]
    Cart(#[from] CartsServiceError),

    #[error("storage error")]
    Store(#[from] StoreError),
}

impl TemplatesServiceError {
    /// Whether the error is a user-facing validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::EmptyCart
            | Self::NameRequired
            | Self::RenameNameRequired
            | Self::InvalidData(_) => true,
            Self::Cart(error) => error.is_validation(),
            Self::NotFound | Self::Store(_) => false,
        }
    }
}

impl From<TemplateError> for TemplatesServiceError {
    fn from(error: TemplateError) -> Self {
        match error {
            TemplateError::EmptyCart => Self::EmptyCart,
            TemplateError::NameRequired => Self::NameRequired,
            TemplateError::RenameNameRequired => Self::RenameNameRequired,
            TemplateError::NotFound(_) => Self::NotFound,
            TemplateError::Cart(error) => Self::Cart(error.into()),
            TemplateError::DuplicateId(_) | TemplateError::InvalidItem(_) => {
                Self::InvalidData(error)
            }
        }
    }
}
