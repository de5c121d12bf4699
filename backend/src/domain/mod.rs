//! Domain primitives, ports and services.
//!
//! Purpose: define the order read model, the filter used to select orders and
//! the service that joins orders with catalog metadata. Nothing in here knows
//! about HTTP, Diesel or reqwest; adapters reach the domain through `ports`.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure reported by driving ports.
//! - Order / CatalogModel / OrderState: the read model.
//! - OrderFilter / FilterColumn / FilterValue: the selection predicate.
//! - OrderEnrichmentService: the `OrdersQuery` implementation.
//! - TraceId: per-request correlation identifier.

pub mod error;
pub mod order;
pub mod order_enrichment_service;
pub mod order_filter;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::order::{CatalogModel, Order, OrderState};
pub use self::order_enrichment_service::{DEFAULT_MAX_CONCURRENCY, OrderEnrichmentService};
pub use self::order_filter::{FilterColumn, FilterValue, FilterValueError, OrderFilter};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
