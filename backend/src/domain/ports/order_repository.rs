//! Driven port for reading persisted orders.
//!
//! Adapters translate an [`OrderFilter`] into a parameterised query and map
//! rows into [`Order`] records. No enrichment happens here.

use async_trait::async_trait;

use crate::domain::{Order, OrderFilter};

use super::define_port_error;

define_port_error! {
    /// Errors raised while reading orders. Both abort the whole retrieval.
    pub enum OrderRepositoryError {
        /// The store could not be reached or no connection was available.
        Connection { message: String } =>
            "order store connection failed: {message}",
        /// The query failed or a row could not be decoded.
        Query { message: String } =>
            "order query failed: {message}",
    }
}

/// Port for selecting orders by an equality predicate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Return every order matching `filter`, in store order.
    ///
    /// No matching rows yields an empty vector rather than an error.
    async fn fetch_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderRepositoryError>;
}
