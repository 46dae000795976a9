//! CRM wire records.

use portal::prelude::OrderLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub(super) access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateOrderRequest<'a> {
    pub(super) account_id: &'a str,
    pub(super) cart_items: Vec<CartItemPayload<'a>>,
}

impl<'a> CreateOrderRequest<'a> {
    pub(super) fn new(account_id: &'a str, lines: &'a [OrderLine]) -> Self {
        Self {
            account_id,
            cart_items: lines
                .iter()
                .map(|line| CartItemPayload {
                    product_id: line.product_id.as_str(),
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CartItemPayload<'a> {
    pub(super) product_id: &'a str,
    pub(super) quantity: u32,
}

/// Body returned by the order creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,

    #[serde(default)]
    pub order_number: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct QueryResponse<T> {
    pub(super) records: Vec<T>,
}

/// Nested relationship records, as returned by a sub-select.
#[derive(Debug, Clone, Deserialize)]
pub struct RelatedRecords<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

/// A standard price book entry for a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PricebookEntryRecord {
    #[serde(default)]
    pub unit_price: Option<Decimal>,
}

/// A product row from the CRM product query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductRecord {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub product_code: Option<String>,

    #[serde(default)]
    pub family: Option<String>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(rename = "Product_Image_URL__c", default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub pricebook_entries: Option<RelatedRecords<PricebookEntryRecord>>,
}

impl ProductRecord {
    /// Unit price of the first standard price book entry, if any.
    #[must_use]
    pub fn standard_price(&self) -> Option<Decimal> {
        self.pricebook_entries
            .as_ref()?
            .records
            .first()?
            .unit_price
    }
}

#[cfg(test)]
mod tests {
    use portal::prelude::ProductId;
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn order_request_uses_camel_case_fields() -> TestResult {
        let lines = vec![OrderLine {
            product_id: ProductId::new("01t000"),
            quantity: 50,
        }];

        let body = serde_json::to_value(CreateOrderRequest::new("001ACC", &lines))?;

        assert_eq!(
            body,
            serde_json::json!({
                "accountId": "001ACC",
                "cartItems": [{ "productId": "01t000", "quantity": 50 }]
            })
        );

        Ok(())
    }

    #[test]
    fn product_record_reads_nested_price() -> TestResult {
        let record: ProductRecord = serde_json::from_value(serde_json::json!({
            "Id": "01t000",
            "Name": "PVC Pipe 4in",
            "ProductCode": "PVC-4",
            "Family": "Pipes",
            "IsActive": true,
            "Product_Image_URL__c": null,
            "PricebookEntries": { "records": [{ "UnitPrice": 120.5 }] }
        }))?;

        assert_eq!(record.standard_price(), Some(dec!(120.5)));
        assert_eq!(record.image_url, None);

        Ok(())
    }

    #[test]
    fn product_record_without_price_entries() -> TestResult {
        let record: ProductRecord = serde_json::from_value(serde_json::json!({
            "Id": "01t001",
            "Name": "Elbow Joint",
            "PricebookEntries": null
        }))?;

        assert_eq!(record.standard_price(), None);
        assert!(!record.is_active);

        Ok(())
    }
}
