//! Orders Config

use clap::{Args, ValueEnum};

/// How orders are submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderStrategy {
    /// Record orders in the local order history.
    Local,

    /// Create orders in the CRM.
    Remote,
}

/// Order submission settings.
#[derive(Debug, Clone, Args)]
pub struct OrdersConfig {
    /// Order submission strategy (local, remote)
    #[arg(
        long = "order-strategy",
        env = "PORTAL_ORDER_STRATEGY",
        value_enum,
        default_value_t = OrderStrategy::Local
    )]
    pub strategy: OrderStrategy,
}
