//! PostgreSQL-backed `OrderRepository` implementation using Diesel ORM.
//!
//! The filter value and state are always bound as query parameters; the
//! column choice is made from a closed enum, never from caller text.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{FilterColumn, Order, OrderFilter};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::OrderRow;
use super::pool::DbPool;
use super::schema::customs;

/// Diesel-backed order reader.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Build the `customs` selection for `filter`, ordered by id.
fn filtered_orders(filter: &OrderFilter) -> customs::BoxedQuery<'static, Pg> {
    let value = filter.value().as_str().to_owned();
    let mut query = match filter.column() {
        FilterColumn::OwningUser => customs::table
            .filter(customs::user_id.eq(value))
            .into_boxed(),
        FilterColumn::Creator => customs::table
            .filter(customs::created_by.eq(value))
            .into_boxed(),
    };

    if let Some(state) = filter.state() {
        query = query.filter(customs::state.eq(state.as_str()));
    }

    query.order(customs::id.asc())
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn fetch_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<OrderRow> = filtered_orders(filter)
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "load orders"))?;

        Ok(rows.into_iter().map(Order::from).collect())
    }
}
