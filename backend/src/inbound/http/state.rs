//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::OrdersQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Order lookup use-case.
    pub orders: Arc<dyn OrdersQuery>,
}

impl HttpState {
    /// Construct state from the order lookup port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use async_trait::async_trait;
    /// use order_lookup::domain::ports::OrdersQuery;
    /// use order_lookup::domain::{Error, Order, OrderFilter};
    /// use order_lookup::inbound::http::state::HttpState;
    ///
    /// struct NoOrders;
    ///
    /// #[async_trait]
    /// impl OrdersQuery for NoOrders {
    ///     async fn enriched_orders(&self, _filter: &OrderFilter) -> Result<Vec<Order>, Error> {
    ///         Ok(Vec::new())
    ///     }
    /// }
    ///
    /// let state = HttpState::new(Arc::new(NoOrders));
    /// let _orders = state.orders.clone();
    /// ```
    pub fn new(orders: Arc<dyn OrdersQuery>) -> Self {
        Self { orders }
    }
}
