//! Catalog outbound adapter.
//!
//! Thin reqwest implementation of the `CatalogSource` port: one `GET` per
//! model id against the configured catalog base URL.

mod dto;
mod http_source;

pub use http_source::CatalogHttpSource;
