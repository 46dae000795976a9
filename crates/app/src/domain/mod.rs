//! Portal Domain Services

pub mod carts;
pub mod orders;
pub mod templates;
