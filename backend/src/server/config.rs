//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::num::NonZeroUsize;

use order_lookup::domain::DEFAULT_MAX_CONCURRENCY;
use order_lookup::outbound::catalog::CatalogHttpSource;
use order_lookup::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) catalog: CatalogHttpSource,
    pub(crate) catalog_max_concurrency: NonZeroUsize,
}

impl ServerConfig {
    /// Construct a configuration listening on `bind_addr` and serving lookups
    /// from the given order store pool and catalog client.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, catalog: CatalogHttpSource) -> Self {
        Self {
            bind_addr,
            db_pool,
            catalog,
            catalog_max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Bound catalog lookups in flight per request.
    #[must_use]
    pub fn with_catalog_max_concurrency(mut self, limit: NonZeroUsize) -> Self {
        self.catalog_max_concurrency = limit;
        self
    }
}
