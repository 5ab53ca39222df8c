use std::sync::Arc;

use anyhow::Context;

use skuvault_infra::{
    AppConfig, InMemoryProductStore, PostgresProductStore, ProductStore, StoreKind, db,
};

/// Dependencies shared by all handlers.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Services backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductStore::new()))
    }

    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }
}

/// Construct the configured store. Postgres mode connects and migrates first;
/// any failure there is returned to the caller, which treats it as fatal.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    match config.store {
        StoreKind::Memory => {
            tracing::warn!("STORE=memory; products are not persisted across restarts");
            Ok(AppServices::in_memory())
        }
        StoreKind::Postgres => {
            let db_config = config
                .database
                .as_ref()
                .context("database configuration missing for postgres store")?;

            let pool = db::connect_and_migrate(db_config)
                .await
                .context("failed to connect to Postgres and apply migrations")?;

            Ok(AppServices::new(Arc::new(PostgresProductStore::new(pool))))
        }
    }
}
