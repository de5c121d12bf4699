//! Order lookup entry-point: loads settings, wires adapters and serves HTTP.

mod server;

use std::env;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use order_lookup::inbound::http::health::HealthState;
use order_lookup::outbound::catalog::CatalogHttpSource;
use order_lookup::outbound::persistence::{DbPool, PoolConfig};
use order_lookup::settings::ServiceSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = build_server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    info!("order lookup stopped");
    result
}

async fn build_server_config(settings: &ServiceSettings) -> std::io::Result<ServerConfig> {
    let invalid = |e: order_lookup::settings::SettingsError| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    };

    let database_url = settings.database_url().map_err(invalid)?;
    let catalog_base_url = settings.catalog_base_url().map_err(invalid)?;
    let bind_addr = settings.bind_addr().map_err(invalid)?;

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(|e| std::io::Error::other(e.to_string()))?;

    let catalog = CatalogHttpSource::new(catalog_base_url.clone(), settings.catalog_timeout())
        .map_err(|e| std::io::Error::other(format!("failed to build catalog client: {e}")))?;

    info!(
        catalog = %catalog_base_url,
        catalog_timeout = ?settings.catalog_timeout(),
        catalog_max_concurrency = settings.catalog_max_concurrency().get(),
        db_max_connections = settings.db_max_connections(),
        "settings loaded"
    );

    Ok(ServerConfig::new(bind_addr, pool, catalog)
        .with_catalog_max_concurrency(settings.catalog_max_concurrency()))
}
