//! Reqwest-backed catalog source adapter.
//!
//! This adapter owns transport details only: URL construction, the request
//! timeout, status classification and JSON decoding into [`CatalogModel`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::CatalogResponseDto;
use crate::domain::CatalogModel;
use crate::domain::ports::{CatalogSource, CatalogSourceError};

const USER_AGENT: &str = concat!("order-lookup/", env!("CARGO_PKG_VERSION"));

/// Catalog source performing `GET <base>/<model_id>` requests.
#[derive(Clone)]
pub struct CatalogHttpSource {
    client: Client,
    base_url: Url,
}

impl CatalogHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// ```rust,ignore
    /// let base = Url::parse("http://catalog.internal/catalog/models/id/")?;
    /// let source = CatalogHttpSource::new(base, Duration::from_secs(5))?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn model_url(&self, model_id: &str) -> Result<Url, CatalogSourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CatalogSourceError::unreachable(format!(
                    "catalog base URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(model_id);
        Ok(url)
    }
}

#[async_trait]
impl CatalogSource for CatalogHttpSource {
    async fn fetch_model(&self, model_id: &str) -> Result<CatalogModel, CatalogSourceError> {
        let url = self.model_url(model_id)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            // The status decides the outcome; a short or broken body does not.
            let _ = response.bytes().await;
            return Err(CatalogSourceError::not_found(model_id, status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_model(body.as_ref())
    }
}

fn parse_model(body: &[u8]) -> Result<CatalogModel, CatalogSourceError> {
    let decoded: CatalogResponseDto = serde_json::from_slice(body).map_err(|error| {
        CatalogSourceError::malformed(format!("invalid catalog JSON payload: {error}"))
    })?;
    Ok(decoded.into_domain())
}

fn map_transport_error(error: reqwest::Error) -> CatalogSourceError {
    if error.is_timeout() {
        CatalogSourceError::unreachable(format!("request timed out: {error}"))
    } else {
        CatalogSourceError::unreachable(error.to_string())
    }
}
