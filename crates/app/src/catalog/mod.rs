//! Catalog sources
//!
//! The cart only ever sees [`Product`] values; where they come from is up to
//! the configured source.

use async_trait::async_trait;
use mockall::automock;
use portal::prelude::{Product, ProductId};
use thiserror::Error;

use crate::crm::CrmError;

mod crm;
mod file;

pub use crm::{CrmCatalog, product_from_record};
pub use file::FileCatalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("invalid catalog product {id}: {reason}")]
    InvalidProduct { id: String, reason: &'static str },

    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("failed to fetch catalog")]
    Crm(#[from] CrmError),
}

impl CatalogError {
    /// Whether the error is a user-facing validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidProduct { .. })
    }
}

#[automock]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All products, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be loaded.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Look up a single product by id.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] for an unknown id, or the source's error.
pub async fn find_product(
    source: &dyn CatalogSource,
    id: &ProductId,
) -> Result<Product, CatalogError> {
    source
        .list_products()
        .await?
        .into_iter()
        .find(|product| &product.id == id)
        .ok_or_else(|| CatalogError::NotFound(id.clone()))
}
