//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the order lookup endpoints, the health checks and the
//! wire schemas. The document backs Swagger UI in debug builds and is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::orders::{CatalogModelResponse, OrderResponse, OrdersResponse};
use crate::inbound::http::schemas::ErrorResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order lookup API",
        description = "Read-only access to custom orders, enriched with catalog model metadata when available."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::orders::list_required_orders,
        crate::inbound::http::orders::list_paid_orders,
        crate::inbound::http::orders::list_orders_by_creator,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(OrdersResponse, OrderResponse, CatalogModelResponse, ErrorResponse)),
    tags(
        (name = "orders", description = "Order lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
