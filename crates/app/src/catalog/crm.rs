//! CRM-backed catalog.

use async_trait::async_trait;
use portal::prelude::{Product, ProductId};
use rust_decimal::Decimal;

use super::{CatalogError, CatalogSource};
use crate::crm::{CrmClient, ProductRecord};

const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_MIN_ORDER_QUANTITY: u32 = 10;
const DEFAULT_UNIT: &str = "units";
const DEFAULT_PROMOTIONS: [&str; 2] = ["Bulk Discount Available", "Limited Time Offer"];
const QUERY_LIMIT: u32 = 200;

/// List price markup applied to the standard price, as a multiplier.
fn list_markup() -> Decimal {
    Decimal::new(11, 1)
}

/// Products of one family, queried from the CRM.
#[derive(Debug, Clone)]
pub struct CrmCatalog {
    client: CrmClient,
    family: String,
}

impl CrmCatalog {
    #[must_use]
    pub fn new(client: CrmClient, family: impl Into<String>) -> Self {
        Self {
            client,
            family: family.into(),
        }
    }

    fn query(&self) -> String {
        let family = self.family.replace('\\', "\\\\").replace('\'', "\\'");

        format!(
            "SELECT Id, Name, ProductCode, Family, IsActive, Product_Image_URL__c, \
             (SELECT UnitPrice FROM PricebookEntries WHERE Pricebook2.IsStandard = true LIMIT 1) \
             FROM Product2 WHERE Family = '{family}' ORDER BY CreatedDate DESC LIMIT {QUERY_LIMIT}"
        )
    }
}

#[async_trait]
impl CatalogSource for CrmCatalog {
    #[tracing::instrument(name = "catalog.crm.list_products", skip(self), fields(family = %self.family), err)]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let token = self.client.access_token().await?;

        let records = self.client.query_products(&token, &self.query()).await?;

        tracing::info!(count = records.len(), "fetched catalog from CRM");

        Ok(records.into_iter().map(product_from_record).collect())
    }
}

/// Map a CRM product row onto a catalog product, filling portal defaults.
#[must_use]
pub fn product_from_record(record: ProductRecord) -> Product {
    let unit_price = record.standard_price().unwrap_or_default();
    let family = record.family.filter(|family| !family.trim().is_empty());
    let code = record.product_code.unwrap_or_default();

    Product {
        description: format!(
            "High quality {} - {code}",
            family.as_deref().unwrap_or_default()
        ),
        category: family.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        id: ProductId::new(record.id),
        name: record.name,
        unit_price,
        list_price: unit_price * list_markup(),
        image_url: record.image_url,
        rating_estimate: None,
        in_stock: record.is_active,
        promotions: DEFAULT_PROMOTIONS.iter().map(ToString::to_string).collect(),
        min_order_quantity: DEFAULT_MIN_ORDER_QUANTITY,
        unit: DEFAULT_UNIT.to_string(),
    }
}
