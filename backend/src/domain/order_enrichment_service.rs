//! Order lookup with best-effort catalog enrichment.
//!
//! The service reads orders through the [`OrderRepository`] port and asks the
//! [`CatalogSource`] about each order's model. A failed lookup only costs that
//! order its `model_details`; a failed read aborts the whole request.

use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use tracing::{error, warn};

use crate::domain::ports::{CatalogSource, OrderRepository, OrderRepositoryError, OrdersQuery};
use crate::domain::{Error, Order, OrderFilter};

/// Lookups in flight per request when no limit is configured.
pub const DEFAULT_MAX_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(value) => value,
    None => unreachable!(),
};

fn map_repository_error(error: OrderRepositoryError) -> Error {
    match error {
        OrderRepositoryError::Connection { message } => {
            let err = Error::internal("Database connection failed");
            error!(trace_id = err.trace_id(), %message, "order store unavailable");
            err
        }
        OrderRepositoryError::Query { message } => {
            let err = Error::internal("Failed to fetch orders");
            error!(trace_id = err.trace_id(), %message, "order query failed");
            err
        }
    }
}

/// Driving-port implementation joining stored orders with catalog metadata.
pub struct OrderEnrichmentService<R, C> {
    orders: Arc<R>,
    catalog: Arc<C>,
    max_concurrency: NonZeroUsize,
}

impl<R, C> Clone for OrderEnrichmentService<R, C> {
    fn clone(&self) -> Self {
        Self {
            orders: Arc::clone(&self.orders),
            catalog: Arc::clone(&self.catalog),
            max_concurrency: self.max_concurrency,
        }
    }
}

impl<R, C> OrderEnrichmentService<R, C> {
    /// Create a service over the given repository and catalog.
    pub fn new(orders: Arc<R>, catalog: Arc<C>) -> Self {
        Self {
            orders,
            catalog,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Bound the number of catalog lookups in flight for one request.
    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: NonZeroUsize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }
}

impl<R, C> OrderEnrichmentService<R, C>
where
    C: CatalogSource,
{
    async fn enrich(&self, order: Order) -> Order {
        match self.catalog.fetch_model(&order.model_id).await {
            Ok(model) if model.model_id == order.model_id => order.with_model_details(model),
            Ok(model) => {
                warn!(
                    model_id = %order.model_id,
                    returned_model_id = %model.model_id,
                    "catalog returned a different model; skipping enrichment"
                );
                order
            }
            Err(err) => {
                warn!(model_id = %order.model_id, error = %err, "catalog lookup failed");
                order
            }
        }
    }
}

#[async_trait]
impl<R, C> OrdersQuery for OrderEnrichmentService<R, C>
where
    R: OrderRepository,
    C: CatalogSource,
{
    async fn enriched_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, Error> {
        let orders = self
            .orders
            .fetch_orders(filter)
            .await
            .map_err(map_repository_error)?;

        // `buffered` yields in input order whatever order lookups finish in.
        let enriched = stream::iter(orders)
            .map(|order| self.enrich(order))
            .buffered(self.max_concurrency.get())
            .collect()
            .await;
        Ok(enriched)
    }
}

#[cfg(test)]
#[path = "order_enrichment_service_tests.rs"]
mod tests;
