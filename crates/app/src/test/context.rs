//! Test context for service-level tests.

use std::sync::Arc;

use crate::{
    domain::{
        carts::StoreCartsService, orders::LocalOrderSubmitter, orders::PortalOrdersService,
        templates::StoreTemplatesService,
    },
    store::MemoryStore,
};

/// Services wired over a fresh in-memory store with local order submission.
pub(crate) struct TestContext {
    pub store: Arc<MemoryStore>,
    pub carts: StoreCartsService,
    pub templates: StoreTemplatesService,
    pub orders: PortalOrdersService,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let carts = StoreCartsService::new(store.clone());

        Self {
            templates: StoreTemplatesService::new(store.clone(), Arc::new(carts.clone())),
            orders: PortalOrdersService::new(
                store.clone(),
                Arc::new(carts.clone()),
                Arc::new(LocalOrderSubmitter::new(store.clone())),
            ),
            carts,
            store,
        }
    }
}
