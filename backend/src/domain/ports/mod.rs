//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`OrderRepository`, `CatalogSource`) expose strongly typed
//! errors so adapters map their failures into predictable variants. The
//! driving port (`OrdersQuery`) speaks the domain [`Error`](super::Error).

mod macros;
pub(crate) use macros::define_port_error;

mod catalog_source;
mod order_repository;
mod orders_query;

#[cfg(test)]
pub use catalog_source::MockCatalogSource;
pub use catalog_source::{CatalogSource, CatalogSourceError};
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderRepository, OrderRepositoryError};
#[cfg(test)]
pub use orders_query::MockOrdersQuery;
pub use orders_query::OrdersQuery;
