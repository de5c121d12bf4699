//! Driven port for looking up model metadata in the external catalog.

use async_trait::async_trait;

use crate::domain::CatalogModel;

use super::define_port_error;

define_port_error! {
    /// Reasons a catalog lookup produced no model.
    ///
    /// Every variant is recoverable: callers drop the enrichment and carry on.
    pub enum CatalogSourceError {
        /// The request did not complete (connection failure or timeout).
        Unreachable { message: String } =>
            "catalog unreachable: {message}",
        /// The catalog answered with a status other than 200.
        NotFound { model_id: String, status: u16 } =>
            "model {model_id} not found (status {status})",
        /// The response body did not decode into a model.
        Malformed { message: String } =>
            "catalog response malformed: {message}",
    }
}

/// Port for single-model catalog lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch metadata for `model_id`. One outbound call, no retries.
    async fn fetch_model(&self, model_id: &str) -> Result<CatalogModel, CatalogSourceError>;
}
