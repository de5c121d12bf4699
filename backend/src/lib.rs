//! Order lookup service library.
//!
//! Hexagonal layout: `domain` holds the read model, ports and the enrichment
//! service; `outbound` adapts PostgreSQL and the catalog HTTP API; `inbound`
//! exposes the actix-web handlers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
