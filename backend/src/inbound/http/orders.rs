//! Order lookup endpoints.
//!
//! ```text
//! GET /orders/user/{user_id}/required
//! GET /orders/user/{user_id}/paid
//! GET /orders/created_by/{created_by}
//! ```
//!
//! Each route builds an [`OrderFilter`] and delegates to the
//! [`OrdersQuery`](crate::domain::ports::OrdersQuery) port.

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    CatalogModel, Error, FilterColumn, FilterValue, Order, OrderFilter, OrderState,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorResponse;
use crate::inbound::http::state::HttpState;

/// Catalog metadata nested under an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogModelResponse {
    /// Catalog identifier; equals the order's `model_id`.
    #[schema(example = "m1")]
    pub model_id: String,
    /// Display name.
    #[schema(example = "Low-poly fox")]
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// File format.
    #[schema(example = "stl")]
    pub format: String,
    /// Display price as published by the catalog.
    #[schema(example = "12.50")]
    pub price: String,
    /// Identifier of the model's creator.
    pub created_by: String,
}

impl From<CatalogModel> for CatalogModelResponse {
    fn from(model: CatalogModel) -> Self {
        Self {
            model_id: model.model_id,
            name: model.name,
            description: model.description,
            format: model.format,
            price: model.price,
            created_by: model.created_by,
        }
    }
}

/// One order in a lookup response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    /// Storage-assigned identifier.
    #[schema(example = 42)]
    pub id: i32,
    /// Catalog model reference.
    #[schema(example = "m1")]
    pub model_id: String,
    /// Opaque customisation payload.
    pub custom_params: String,
    /// Owning user.
    #[schema(example = "u1")]
    pub user_id: String,
    /// Creator of the order.
    #[schema(example = "alice")]
    pub created_by: String,
    /// Creation timestamp, passed through as stored.
    #[schema(example = "2024-05-01 10:30:00+00")]
    pub created_at: String,
    /// Quoted cost.
    pub cost_initial: f64,
    /// Settled cost.
    pub cost_final: f64,
    /// Lifecycle state as stored.
    #[schema(example = "paid")]
    pub state: String,
    /// Catalog metadata; absent when the lookup failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_details: Option<CatalogModelResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            model_id: order.model_id,
            custom_params: order.custom_params,
            user_id: order.user_id,
            created_by: order.created_by,
            created_at: order.created_at,
            cost_initial: order.cost_initial,
            cost_final: order.cost_final,
            state: order.state,
            model_details: order.model_details.map(CatalogModelResponse::from),
        }
    }
}

/// Envelope for every successful lookup. Empty results serialise as `[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrdersResponse {
    /// Matching orders in store order.
    pub orders: Vec<OrderResponse>,
}

fn filter_value(raw: String, column: FilterColumn) -> Result<FilterValue, Error> {
    FilterValue::new(raw).map_err(|_| {
        Error::invalid_request(format!("{} must not be blank", column.field_name()))
    })
}

async fn lookup(state: &HttpState, filter: OrderFilter) -> ApiResult<HttpResponse> {
    let orders = state.orders.enriched_orders(&filter).await?;
    Ok(HttpResponse::Ok().json(OrdersResponse {
        orders: orders.into_iter().map(OrderResponse::from).collect(),
    }))
}

async fn owned_orders(
    state: &HttpState,
    user_id: String,
    order_state: OrderState,
) -> ApiResult<HttpResponse> {
    let user = filter_value(user_id, FilterColumn::OwningUser)?;
    lookup(state, OrderFilter::owned_by(user, order_state)).await
}

/// List a user's orders awaiting completion.
#[utoipa::path(
    get,
    path = "/orders/user/{user_id}/required",
    params(("user_id" = String, Path, description = "Owning user identifier")),
    responses(
        (status = 200, description = "Orders in state `required`", body = OrdersResponse),
        (status = 400, description = "Blank user identifier", body = ErrorResponse),
        (status = 500, description = "Order store unavailable or query failed", body = ErrorResponse)
    ),
    tags = ["orders"],
    operation_id = "listRequiredOrders"
)]
#[get("/orders/user/{user_id}/required")]
pub async fn list_required_orders(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    owned_orders(&state, path.into_inner(), OrderState::Required).await
}

/// List a user's paid orders.
#[utoipa::path(
    get,
    path = "/orders/user/{user_id}/paid",
    params(("user_id" = String, Path, description = "Owning user identifier")),
    responses(
        (status = 200, description = "Orders in state `paid`", body = OrdersResponse),
        (status = 400, description = "Blank user identifier", body = ErrorResponse),
        (status = 500, description = "Order store unavailable or query failed", body = ErrorResponse)
    ),
    tags = ["orders"],
    operation_id = "listPaidOrders"
)]
#[get("/orders/user/{user_id}/paid")]
pub async fn list_paid_orders(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    owned_orders(&state, path.into_inner(), OrderState::Paid).await
}

/// List every order a creator originated, in any state.
#[utoipa::path(
    get,
    path = "/orders/created_by/{created_by}",
    params(("created_by" = String, Path, description = "Creator identifier")),
    responses(
        (status = 200, description = "Orders created by the given identity", body = OrdersResponse),
        (status = 400, description = "Blank creator identifier", body = ErrorResponse),
        (status = 500, description = "Order store unavailable or query failed", body = ErrorResponse)
    ),
    tags = ["orders"],
    operation_id = "listOrdersByCreator"
)]
#[get("/orders/created_by/{created_by}")]
pub async fn list_orders_by_creator(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let creator = filter_value(path.into_inner(), FilterColumn::Creator)?;
    lookup(&state, OrderFilter::created_by(creator)).await
}

#[cfg(test)]
#[path = "orders_tests.rs"]
mod tests;
