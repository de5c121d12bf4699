//! Error mapping shared by Diesel adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::OrderRepositoryError;

use super::pool::PoolError;

/// Map pool failures to connection errors.
pub fn map_pool_error(error: PoolError) -> OrderRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            OrderRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to repository errors and emit debug context.
///
/// A connection closed mid-query counts as a connection failure; everything
/// else, including rows that fail to decode, is a query failure.
pub fn map_diesel_error(error: DieselError, operation: &str) -> OrderRepositoryError {
    let message = error.to_string();
    debug!(%message, %operation, "diesel operation failed");

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => OrderRepositoryError::connection(message),
        _ => OrderRepositoryError::query(message),
    }
}
