//! Builders for the HTTP state from configured adapters.

use std::sync::Arc;

use actix_web::web;

use order_lookup::domain::OrderEnrichmentService;
use order_lookup::inbound::http::state::HttpState;
use order_lookup::outbound::persistence::DieselOrderRepository;

use super::ServerConfig;

/// Build the shared HTTP state over the Diesel repository and catalog client.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = OrderEnrichmentService::new(
        Arc::new(DieselOrderRepository::new(config.db_pool.clone())),
        Arc::new(config.catalog.clone()),
    )
    .with_max_concurrency(config.catalog_max_concurrency);
    web::Data::new(HttpState::new(Arc::new(service)))
}
