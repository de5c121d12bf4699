//! Driving port for order lookups.
//!
//! HTTP handlers depend on this port only, so they stay testable without a
//! database or a catalog.

use async_trait::async_trait;

use crate::domain::{Error, Order, OrderFilter};

/// Use-case port returning orders enriched with catalog metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersQuery: Send + Sync {
    /// Return the orders matching `filter`.
    ///
    /// Enrichment is best effort: orders whose lookup failed come back
    /// without `model_details`. Only a store failure yields `Err`.
    async fn enriched_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, Error>;
}
