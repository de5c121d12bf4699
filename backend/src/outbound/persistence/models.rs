//! Diesel row structs. Internal to the persistence adapter.

use diesel::dsl::sql;
use diesel::expression::SqlLiteral;
use diesel::prelude::*;
use diesel::sql_types::{Double, Text};

use crate::domain::Order;

use super::schema::customs;

/// Queryable row for the `customs` table.
///
/// The timestamp is selected as the store's own text rendering and the costs
/// as `float8`, whatever the underlying column types are.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub id: i32,
    pub model_id: String,
    pub custom_params: String,
    pub user_id: String,
    pub created_by: String,
    #[diesel(select_expression = sql::<Text>("\"customs\".\"created_at\"::text"))]
    #[diesel(select_expression_type = SqlLiteral<Text>)]
    pub created_at: String,
    #[diesel(select_expression = sql::<Double>("\"customs\".\"cost_initial\"::float8"))]
    #[diesel(select_expression_type = SqlLiteral<Double>)]
    pub cost_initial: f64,
    #[diesel(select_expression = sql::<Double>("\"customs\".\"cost_final\"::float8"))]
    #[diesel(select_expression_type = SqlLiteral<Double>)]
    pub cost_final: f64,
    pub state: String,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            model_id: row.model_id,
            custom_params: row.custom_params,
            user_id: row.user_id,
            created_by: row.created_by,
            created_at: row.created_at,
            cost_initial: row.cost_initial,
            cost_final: row.cost_final,
            state: row.state,
            model_details: None,
        }
    }
}
