//! In-memory adapters and a request helper shared by the HTTP-level suites.
//!
//! Requests run through the real handlers, the `Trace` middleware and the
//! enrichment service; only the order store and the catalog are replaced.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::Value;

use order_lookup::Trace;
use order_lookup::domain::ports::{
    CatalogSource, CatalogSourceError, OrderRepository, OrderRepositoryError,
};
use order_lookup::domain::{
    CatalogModel, FilterColumn, Order, OrderEnrichmentService, OrderFilter, TRACE_ID_HEADER,
};
use order_lookup::inbound::http::orders::{
    list_orders_by_creator, list_paid_orders, list_required_orders,
};
use order_lookup::inbound::http::state::HttpState;

/// Order store answering from memory or failing every read.
pub enum ScriptedOrders {
    /// Filter these orders the way the store would.
    Rows(Vec<Order>),
    /// Fail every read with this error.
    Failing(OrderRepositoryError),
}

#[async_trait]
impl OrderRepository for ScriptedOrders {
    async fn fetch_orders(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        let orders = match self {
            Self::Rows(orders) => orders,
            Self::Failing(error) => return Err(error.clone()),
        };
        let wanted = filter.value().as_str();
        Ok(orders
            .iter()
            .filter(|order| match filter.column() {
                FilterColumn::OwningUser => order.user_id == wanted,
                FilterColumn::Creator => order.created_by == wanted,
            })
            .filter(|order| {
                filter
                    .state()
                    .is_none_or(|state| order.state == state.as_str())
            })
            .cloned()
            .collect())
    }
}

/// Catalog answering 200 for known models and 404 for everything else.
#[derive(Default)]
pub struct StubCatalog {
    models: HashMap<String, CatalogModel>,
}

impl StubCatalog {
    /// Make `model` known to the catalog.
    pub fn with_model(mut self, model: CatalogModel) -> Self {
        self.models.insert(model.model_id.clone(), model);
        self
    }
}

#[async_trait]
impl CatalogSource for StubCatalog {
    async fn fetch_model(&self, model_id: &str) -> Result<CatalogModel, CatalogSourceError> {
        self.models
            .get(model_id)
            .cloned()
            .ok_or_else(|| CatalogSourceError::not_found(model_id, 404_u16))
    }
}

pub fn order(id: i32, model_id: &str, user_id: &str, created_by: &str, state: &str) -> Order {
    Order {
        id,
        model_id: model_id.to_owned(),
        custom_params: r#"{"scale":2}"#.to_owned(),
        user_id: user_id.to_owned(),
        created_by: created_by.to_owned(),
        created_at: "2024-05-01 10:30:00+00".to_owned(),
        cost_initial: 10.0,
        cost_final: 12.5,
        state: state.to_owned(),
        model_details: None,
    }
}

pub fn catalog_model(model_id: &str, name: &str) -> CatalogModel {
    CatalogModel {
        model_id: model_id.to_owned(),
        name: name.to_owned(),
        description: format!("{name} description"),
        format: "stl".to_owned(),
        price: "12.50".to_owned(),
        created_by: "alice".to_owned(),
    }
}

/// What a client saw for one request.
pub struct CapturedResponse {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

impl CapturedResponse {
    /// Ids of the listed orders, in response order.
    pub fn order_ids(&self) -> Vec<i64> {
        self.body["orders"]
            .as_array()
            .expect("orders array")
            .iter()
            .filter_map(|order| order["id"].as_i64())
            .collect()
    }

    /// The listed order with `id`.
    pub fn order(&self, id: i64) -> &Value {
        self.body["orders"]
            .as_array()
            .expect("orders array")
            .iter()
            .find(|order| order["id"].as_i64() == Some(id))
            .unwrap_or_else(|| panic!("order {id} should be listed"))
    }
}

/// Issue `GET uri` against the order routes backed by `store` and `catalog`.
pub async fn request_orders(
    store: ScriptedOrders,
    catalog: StubCatalog,
    uri: &str,
) -> CapturedResponse {
    let service = OrderEnrichmentService::new(Arc::new(store), Arc::new(catalog));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(Arc::new(service))))
            .wrap(Trace)
            .service(list_required_orders)
            .service(list_paid_orders)
            .service(list_orders_by_creator),
    )
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    CapturedResponse {
        status,
        trace_id,
        body,
    }
}
