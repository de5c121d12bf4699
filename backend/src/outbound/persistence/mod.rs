//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Reads orders from the `customs` table through `diesel-async` with `bb8`
//! connection pooling. Row structs (`models.rs`) and the table definition
//! (`schema.rs`) stay internal; the domain only sees [`Order`] values and
//! [`OrderRepositoryError`].
//!
//! [`Order`]: crate::domain::Order
//! [`OrderRepositoryError`]: crate::domain::ports::OrderRepositoryError
//!
//! # Example
//!
//! ```ignore
//! use order_lookup::outbound::persistence::{DbPool, DieselOrderRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/orders")).await?;
//! let repo = DieselOrderRepository::new(pool);
//! ```

pub(crate) mod diesel_helpers;
mod diesel_order_repository;
mod models;
mod pool;
mod schema;

pub use diesel_order_repository::DieselOrderRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
