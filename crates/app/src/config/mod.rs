//! Portal configuration
//!
//! Every setting can come from the command line or the environment; a `.env`
//! file is loaded first when present.

use clap::Args;
use thiserror::Error;

mod catalog;
mod crm;
mod logging;
mod orders;
mod store;

pub use catalog::{CatalogConfig, CatalogSourceKind};
pub use crm::CrmArgs;
pub use logging::{LogFormat, LoggingConfig};
pub use orders::{OrderStrategy, OrdersConfig};
pub use store::StoreConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing CRM setting {0}")]
    MissingCrmSetting(&'static str),
}

/// Portal configuration
#[derive(Debug, Clone, Args)]
pub struct PortalConfig {
    /// Persisted store settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Catalog source settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Order submission settings.
    #[command(flatten)]
    pub orders: OrdersConfig,

    /// CRM connection settings.
    #[command(flatten)]
    pub crm: CrmArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl PortalConfig {
    /// Whether any configured collaborator talks to the CRM.
    #[must_use]
    pub fn uses_crm(&self) -> bool {
        self.catalog.source == CatalogSourceKind::Crm || self.orders.strategy == OrderStrategy::Remote
    }
}

/// Load `.env` into the process environment, ignoring a missing file.
pub fn load_dotenv() {
    _ = dotenvy::dotenv();
}
