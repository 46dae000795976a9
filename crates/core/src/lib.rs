//! Portal
//!
//! Ordering core for the distributor portal: catalog products, cart rules and
//! pricing, saved cart templates and placed order records.

pub mod cart;
pub mod ids;
pub mod items;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod templates;
