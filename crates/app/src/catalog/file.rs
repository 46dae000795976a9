//! YAML file catalog.

use std::path::PathBuf;

use async_trait::async_trait;
use portal::prelude::Product;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use super::{CatalogError, CatalogSource};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// Products read from a YAML file with a top-level `products` list.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse catalog YAML.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed YAML, a blank or repeated id, a zero
    /// minimum order quantity, or a negative price.
    pub fn parse(contents: &str) -> Result<Vec<Product>, CatalogError> {
        let catalog: CatalogFile = serde_norway::from_str(contents)?;

        let mut seen = FxHashSet::default();

        for product in &catalog.products {
            let invalid = |reason| CatalogError::InvalidProduct {
                id: product.id.to_string(),
                reason,
            };

            if product.id.is_blank() {
                return Err(invalid("missing id"));
            }

            if !seen.insert(product.id.clone()) {
                return Err(invalid("duplicate id"));
            }

            if product.min_order_quantity == 0 {
                return Err(invalid("minimum order quantity must be positive"));
            }

            if product.unit_price.is_sign_negative() || product.list_price.is_sign_negative() {
                return Err(invalid("negative price"));
            }
        }

        Ok(catalog.products)
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    #[tracing::instrument(name = "catalog.file.list_products", skip(self), fields(path = %self.path.display()), err)]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;

        Self::parse(&contents)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = r#"
products:
  - id: CEM-53
    name: Portland Cement Grade 53
    category: Cement
    unitPrice: "420"
    listPrice: "450"
    inStock: true
    description: Premium quality cement
    promotions: ["Buy 100 bags get 5 free"]
    minOrderQuantity: 50
    unit: bags
  - id: TMT-500D
    name: TMT Steel Bars
    category: Steel
    unitPrice: 65
    listPrice: 70
    inStock: false
    minOrderQuantity: 100
    unit: kg
"#;

    #[test]
    fn parse_reads_products_in_order() -> TestResult {
        let products = FileCatalog::parse(CATALOG)?;

        let ids: Vec<&str> = products.iter().map(|product| product.id.as_str()).collect();

        assert_eq!(ids, ["CEM-53", "TMT-500D"]);
        assert_eq!(products.first().map(|p| p.unit_price), Some(dec!(420)));
        assert_eq!(products.last().map(|p| p.description.as_str()), Some(""));

        Ok(())
    }

    #[test]
    fn zero_minimum_is_rejected() {
        let yaml = CATALOG.replace("minOrderQuantity: 100", "minOrderQuantity: 0");

        let result = FileCatalog::parse(&yaml);

        assert!(matches!(
            result,
            Err(CatalogError::InvalidProduct { ref id, .. }) if id == "TMT-500D"
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = CATALOG.replace("TMT-500D", "CEM-53");

        assert!(matches!(
            FileCatalog::parse(&yaml),
            Err(CatalogError::InvalidProduct { reason: "duplicate id", .. })
        ));
    }

    #[tokio::test]
    async fn list_products_reads_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        file.write_all(CATALOG.as_bytes())?;

        let products = FileCatalog::new(file.path()).list_products().await?;

        assert_eq!(products.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let result = FileCatalog::new("/nonexistent/catalog.yml")
            .list_products()
            .await;

        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn bundled_fixture_parses() -> TestResult {
        let products = FileCatalog::parse(include_str!("../../fixtures/catalog.yml"))?;

        assert_eq!(products.len(), 4);

        Ok(())
    }
}
