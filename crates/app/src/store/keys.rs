//! Store Keys

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Keys the portal persists under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Current cart, a list of line items
    Cart,

    /// Saved cart templates
    Templates,

    /// Placed orders, newest first
    Orders,
}

impl StoreKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Templates => "cartTemplates",
            Self::Orders => "orders",
        }
    }
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
