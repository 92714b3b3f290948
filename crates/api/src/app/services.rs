use std::sync::Arc;

use minimarket_catalog::{CatalogStore, InMemoryProductRepository, ProductRepository, StoreResult};
use minimarket_infra::JsonFileProductRepository;
use minimarket_inventory::InventoryLedger;

use crate::config::Config;

/// Repository handle chosen at startup (file-backed or in-memory).
pub type SharedRepository = Arc<dyn ProductRepository>;

pub type Catalog = CatalogStore<SharedRepository>;
pub type Ledger = InventoryLedger<SharedRepository>;

/// Everything request handlers need. One instance per process, shared via
/// `Extension<Arc<AppServices>>`.
pub struct AppServices {
    pub catalog: Arc<Catalog>,
    pub ledger: Ledger,
    pub low_stock_limit: u64,
}

impl AppServices {
    /// Open the catalog held by `repository` and wire the ledger over it.
    pub fn new(repository: SharedRepository, low_stock_limit: u64) -> StoreResult<Self> {
        let catalog = Arc::new(CatalogStore::open(repository)?);
        let ledger = InventoryLedger::new(catalog.clone());
        Ok(Self {
            catalog,
            ledger,
            low_stock_limit,
        })
    }
}

pub fn build_services(config: &Config) -> StoreResult<AppServices> {
    let repository: SharedRepository = if config.in_memory {
        tracing::warn!("in-memory catalog; data will not survive a restart");
        Arc::new(InMemoryProductRepository::new())
    } else {
        tracing::info!(path = %config.data_file.display(), "using JSON file catalog");
        Arc::new(JsonFileProductRepository::new(&config.data_file))
    };

    let services = AppServices::new(repository, config.low_stock_limit)?;
    tracing::info!(products = services.catalog.len(), "catalog opened");
    Ok(services)
}
