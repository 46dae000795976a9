//! Test Helpers

use portal::prelude::{Product, ProductId};
use rust_decimal::Decimal;

pub(crate) fn product(id: &str, unit_price: Decimal, list_price: Decimal, moq: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        category: "Cement".to_string(),
        unit_price,
        list_price,
        image_url: None,
        rating_estimate: None,
        in_stock: true,
        description: format!("Description of {id}"),
        promotions: vec!["Bulk Discount Available".to_string()],
        min_order_quantity: moq,
        unit: "bags".to_string(),
    }
}
