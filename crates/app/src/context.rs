//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    catalog::{CatalogSource, CrmCatalog, FileCatalog},
    config::{CatalogSourceKind, ConfigError, OrderStrategy, PortalConfig},
    crm::CrmClient,
    domain::{
        carts::{CartsService, StoreCartsService},
        orders::{
            LocalOrderSubmitter, OrderSubmitter, OrdersService, PortalOrdersService,
            RemoteOrderSubmitter,
        },
        templates::{StoreTemplatesService, TemplatesService},
    },
    store::{JsonFileStore, KeyValueStore, StoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open data directory")]
    Store(#[source] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogSource>,
    pub carts: Arc<dyn CartsService>,
    pub templates: Arc<dyn TemplatesService>,
    pub orders: Arc<dyn OrdersService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be opened or the CRM
    /// is selected without its required settings.
    pub fn from_config(config: &PortalConfig) -> Result<Self, AppInitError> {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(JsonFileStore::open(&config.store.data_dir).map_err(AppInitError::Store)?);

        let crm = if config.uses_crm() {
            Some(CrmClient::new(config.crm.to_config()?))
        } else {
            None
        };

        let catalog: Arc<dyn CatalogSource> = match (config.catalog.source, crm.clone()) {
            (CatalogSourceKind::Crm, Some(client)) => {
                Arc::new(CrmCatalog::new(client, config.catalog.family.clone()))
            }
            _ => Arc::new(FileCatalog::new(&config.catalog.file)),
        };

        let submitter: Arc<dyn OrderSubmitter> = match (config.orders.strategy, crm) {
            (OrderStrategy::Remote, Some(client)) => Arc::new(RemoteOrderSubmitter::new(client)),
            _ => Arc::new(LocalOrderSubmitter::new(store.clone())),
        };

        Ok(Self::with_parts(store, catalog, submitter))
    }

    /// Wire services over an existing store, catalog and submitter.
    #[must_use]
    pub fn with_parts(
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<dyn CatalogSource>,
        submitter: Arc<dyn OrderSubmitter>,
    ) -> Self {
        let carts: Arc<dyn CartsService> = Arc::new(StoreCartsService::new(store.clone()));

        Self {
            catalog,
            templates: Arc::new(StoreTemplatesService::new(store.clone(), carts.clone())),
            orders: Arc::new(PortalOrdersService::new(store, carts.clone(), submitter)),
            carts,
        }
    }
}
