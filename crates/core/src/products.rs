//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Category filter value that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Stable product identifier, as issued by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Catalog category
    pub category: String,

    /// Selling price per unit
    pub unit_price: Decimal,

    /// Reference (MRP) price per unit
    pub list_price: Decimal,

    /// Product image
    #[serde(default)]
    pub image_url: Option<String>,

    /// Estimated customer rating, when the catalog provides one
    #[serde(default)]
    pub rating_estimate: Option<Decimal>,

    /// Whether the product can currently be ordered
    pub in_stock: bool,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Promotion labels, display only
    #[serde(default)]
    pub promotions: Vec<String>,

    /// Smallest quantity that may be ordered
    pub min_order_quantity: u32,

    /// Unit of sale, e.g. "bags"
    pub unit: String,
}

impl Product {
    /// Percentage saved against the list price, rounded to a whole percent.
    ///
    /// Returns zero when the product has no list price.
    pub fn discount_percentage(&self) -> Decimal {
        if self.list_price.is_zero() {
            return Decimal::ZERO;
        }

        ((self.list_price - self.unit_price) / self.list_price * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Search and category filter over a product list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogFilter<'a> {
    /// Case-insensitive text matched against name and description.
    pub search: Option<&'a str>,

    /// Exact category, or [`ALL_CATEGORIES`].
    pub category: Option<&'a str>,
}

impl CatalogFilter<'_> {
    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = self.search.is_none_or(|term| {
            let term = term.to_lowercase();

            product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
        });

        let matches_category = self
            .category
            .is_none_or(|category| category == ALL_CATEGORIES || product.category == category);

        matches_search && matches_category
    }
}

/// Returns the products passing `filter`, in catalog order.
pub fn filter_products<'p>(products: &'p [Product], filter: &CatalogFilter<'_>) -> Vec<&'p Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .collect()
}

/// Returns [`ALL_CATEGORIES`] followed by each distinct category in first-seen order.
pub fn categories(products: &[Product]) -> Vec<&str> {
    let mut categories = vec![ALL_CATEGORIES];

    for product in products {
        if !categories.contains(&product.category.as_str()) {
            categories.push(product.category.as_str());
        }
    }

    categories
}

#[cfg(test)]
pub(crate) mod tests {
    use rust_decimal_macros::dec;

    use super::*;

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
            description: String::new(),
            promotions: vec!["Bulk Discount Available".to_string()],
            min_order_quantity: moq,
            unit: "bags".to_string(),
        }
    }

    fn catalog() -> Vec<Product> {
        let mut cement = product("cement", dec!(420), dec!(450), 50);
        cement.name = "Portland Cement Grade 53".to_string();

        let mut steel = product("steel", dec!(65000), dec!(68000), 1);
        steel.name = "TMT Steel Bars".to_string();
        steel.category = "Steel".to_string();
        steel.description = "Fe500D grade reinforcement".to_string();

        let mut tiles = product("tiles", dec!(45), dec!(50), 100);
        tiles.name = "Ceramic Floor Tiles".to_string();
        tiles.category = "Tiles".to_string();

        vec![cement, steel, tiles]
    }

    #[test]
    fn discount_percentage_rounds_to_whole_percent() {
        let cement = product("cement", dec!(420), dec!(450), 50);

        assert_eq!(cement.discount_percentage(), dec!(7));
    }

    #[test]
    fn discount_percentage_without_list_price_is_zero() {
        let free = product("free", dec!(10), Decimal::ZERO, 1);

        assert_eq!(free.discount_percentage(), Decimal::ZERO);
    }

    #[test]
    fn search_matches_name_and_description_case_insensitively() {
        let products = catalog();

        let by_name = filter_products(
            &products,
            &CatalogFilter {
                search: Some("CEMENT"),
                category: None,
            },
        );

        let by_description = filter_products(
            &products,
            &CatalogFilter {
                search: Some("fe500d"),
                category: None,
            },
        );

        assert_eq!(by_name.len(), 1);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description.first().map(|p| p.id.as_str()), Some("steel"));
    }

    #[test]
    fn all_category_matches_everything() {
        let products = catalog();

        let filtered = filter_products(
            &products,
            &CatalogFilter {
                search: Some(""),
                category: Some(ALL_CATEGORIES),
            },
        );

        assert_eq!(filtered.len(), products.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let products = catalog();

        let filtered = filter_products(
            &products,
            &CatalogFilter {
                search: None,
                category: Some("Tiles"),
            },
        );

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().map(|p| p.id.as_str()), Some("tiles"));
    }

    #[test]
    fn categories_start_with_all_and_keep_first_seen_order() {
        let mut products = catalog();
        products.push(product("more-cement", dec!(400), dec!(430), 50));

        assert_eq!(categories(&products), ["All", "Cement", "Steel", "Tiles"]);
    }
}
