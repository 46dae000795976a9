//! Portal prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartState, QuantityChange},
    ids::TypedUuid,
    items::{ItemError, LineItem},
    orders::{Order, OrderError, OrderLine, OrderStatus, order_lines},
    pricing::{CartTotals, TAX_RATE},
    products::{ALL_CATEGORIES, CatalogFilter, Product, ProductId, categories, filter_products},
    templates::{CartTemplate, TemplateError, TemplateId, Templates},
};
