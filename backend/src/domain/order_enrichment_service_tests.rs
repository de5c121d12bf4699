//! Tests for the order enrichment service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    CatalogSourceError, MockCatalogSource, MockOrderRepository, OrderRepositoryError,
};
use crate::domain::{CatalogModel, ErrorCode, FilterValue, OrderState};

fn order(id: i32, model_id: &str) -> Order {
    Order {
        id,
        model_id: model_id.to_owned(),
        custom_params: r#"{"color":"red"}"#.to_owned(),
        user_id: "u1".to_owned(),
        created_by: "alice".to_owned(),
        created_at: "2024-05-01T10:00:00+00:00".to_owned(),
        cost_initial: 10.0,
        cost_final: 12.5,
        state: "paid".to_owned(),
        model_details: None,
    }
}

fn model(model_id: &str) -> CatalogModel {
    CatalogModel {
        model_id: model_id.to_owned(),
        name: format!("Model {model_id}"),
        description: "A printable model".to_owned(),
        format: "stl".to_owned(),
        price: "9.99".to_owned(),
        created_by: "alice".to_owned(),
    }
}

#[fixture]
fn paid_filter() -> OrderFilter {
    OrderFilter::owned_by(FilterValue::new("u1").expect("valid value"), OrderState::Paid)
}

fn repository_returning(orders: Vec<Order>) -> MockOrderRepository {
    let mut repo = MockOrderRepository::new();
    repo.expect_fetch_orders()
        .times(1)
        .return_once(move |_| Ok(orders));
    repo
}

fn service(
    repo: MockOrderRepository,
    catalog: MockCatalogSource,
) -> OrderEnrichmentService<MockOrderRepository, MockCatalogSource> {
    OrderEnrichmentService::new(Arc::new(repo), Arc::new(catalog))
}

#[rstest]
#[tokio::test]
async fn no_matching_orders_yields_empty_list(paid_filter: OrderFilter) {
    let repo = repository_returning(Vec::new());
    let mut catalog = MockCatalogSource::new();
    catalog.expect_fetch_model().times(0);

    let orders = service(repo, catalog)
        .enriched_orders(&paid_filter)
        .await
        .expect("empty result is not an error");

    assert!(orders.is_empty());
}

#[rstest]
#[tokio::test]
async fn filter_is_passed_to_repository(paid_filter: OrderFilter) {
    let expected = paid_filter.clone();
    let mut repo = MockOrderRepository::new();
    repo.expect_fetch_orders()
        .withf(move |filter| *filter == expected)
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    let catalog = MockCatalogSource::new();

    service(repo, catalog)
        .enriched_orders(&paid_filter)
        .await
        .expect("lookup succeeds");
}

#[rstest]
#[tokio::test]
async fn missing_model_leaves_order_without_details(paid_filter: OrderFilter) {
    let repo = repository_returning(vec![order(1, "m1"), order(2, "m2")]);
    let mut catalog = MockCatalogSource::new();
    catalog.expect_fetch_model().times(2).returning(|model_id| {
        if model_id == "m1" {
            Ok(model("m1"))
        } else {
            Err(CatalogSourceError::not_found(model_id, 404_u16))
        }
    });

    let orders = service(repo, catalog)
        .enriched_orders(&paid_filter)
        .await
        .expect("lookup succeeds");

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].model_details, Some(model("m1")));
    assert!(orders[1].model_details.is_none());
}

#[rstest]
#[tokio::test]
async fn failed_lookup_does_not_stop_later_enrichment(paid_filter: OrderFilter) {
    let repo = repository_returning(vec![
        order(1, "down"),
        order(2, "m2"),
        order(3, "garbled"),
        order(4, "m4"),
    ]);
    let mut catalog = MockCatalogSource::new();
    catalog
        .expect_fetch_model()
        .times(4)
        .returning(|model_id| match model_id {
            "down" => Err(CatalogSourceError::unreachable("connection refused")),
            "garbled" => Err(CatalogSourceError::malformed("expected value at line 1")),
            other => Ok(model(other)),
        });

    let orders = service(repo, catalog)
        .enriched_orders(&paid_filter)
        .await
        .expect("lookup succeeds");

    let enriched: Vec<bool> = orders.iter().map(|o| o.model_details.is_some()).collect();
    assert_eq!(enriched, vec![false, true, false, true]);
    assert_eq!(
        orders[3].model_details.as_ref().map(|m| m.model_id.as_str()),
        Some("m4")
    );
}

#[rstest]
#[tokio::test]
async fn mismatched_model_is_not_attached(paid_filter: OrderFilter) {
    let repo = repository_returning(vec![order(1, "m1")]);
    let mut catalog = MockCatalogSource::new();
    catalog
        .expect_fetch_model()
        .times(1)
        .returning(|_| Ok(model("other")));

    let orders = service(repo, catalog)
        .enriched_orders(&paid_filter)
        .await
        .expect("lookup succeeds");

    assert!(orders[0].model_details.is_none());
}

#[rstest]
#[case::connection(OrderRepositoryError::connection("connection refused"), "Database connection failed")]
#[case::query(OrderRepositoryError::query("column \"state\" does not exist"), "Failed to fetch orders")]
#[tokio::test]
async fn repository_failure_is_fatal(
    paid_filter: OrderFilter,
    #[case] failure: OrderRepositoryError,
    #[case] expected_message: &str,
) {
    let mut repo = MockOrderRepository::new();
    repo.expect_fetch_orders()
        .times(1)
        .return_once(move |_| Err(failure));
    let mut catalog = MockCatalogSource::new();
    catalog.expect_fetch_model().times(0);

    let err = service(repo, catalog)
        .enriched_orders(&paid_filter)
        .await
        .expect_err("store failure aborts the lookup");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), expected_message);
}

#[rstest]
#[tokio::test]
async fn identical_inputs_produce_identical_results(paid_filter: OrderFilter) {
    let mut repo = MockOrderRepository::new();
    repo.expect_fetch_orders()
        .times(2)
        .returning(|_| Ok(vec![order(1, "m1"), order(2, "m2")]));
    let mut catalog = MockCatalogSource::new();
    catalog.expect_fetch_model().times(4).returning(|model_id| {
        if model_id == "m1" {
            Ok(model("m1"))
        } else {
            Err(CatalogSourceError::not_found(model_id, 500_u16))
        }
    });
    let service = service(repo, catalog);

    let first = service.enriched_orders(&paid_filter).await.expect("first");
    let second = service.enriched_orders(&paid_filter).await.expect("second");

    assert_eq!(first, second);
}

/// Catalog whose lookups finish in reverse order and record peak parallelism.
#[derive(Default)]
struct SlowCatalog {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

#[async_trait]
impl CatalogSource for SlowCatalog {
    async fn fetch_model(&self, model_id: &str) -> Result<CatalogModel, CatalogSourceError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        let rank: u64 = model_id.trim_start_matches('m').parse().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(60_u64.saturating_sub(rank * 10))).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(model(model_id))
    }
}

#[rstest]
#[tokio::test]
async fn output_follows_repository_order(paid_filter: OrderFilter) {
    let ids = ["m1", "m2", "m3", "m4", "m5"];
    let repo = repository_returning(
        ids.iter()
            .zip(1..)
            .map(|(model_id, id)| order(id, model_id))
            .collect(),
    );
    let service = OrderEnrichmentService::new(Arc::new(repo), Arc::new(SlowCatalog::default()));

    let orders = service
        .enriched_orders(&paid_filter)
        .await
        .expect("lookup succeeds");

    let returned: Vec<&str> = orders.iter().map(|o| o.model_id.as_str()).collect();
    assert_eq!(returned, ids);
    assert!(orders.iter().all(|o| o
        .model_details
        .as_ref()
        .is_some_and(|m| m.model_id == o.model_id)));
}

#[rstest]
#[tokio::test]
async fn lookups_respect_concurrency_limit(paid_filter: OrderFilter) {
    let repo = repository_returning((1..=6).map(|id| order(id, &format!("m{id}"))).collect());
    let catalog = Arc::new(SlowCatalog::default());
    let limit = NonZeroUsize::new(2).expect("non-zero");
    let service =
        OrderEnrichmentService::new(Arc::new(repo), Arc::clone(&catalog)).with_max_concurrency(limit);

    let orders = service
        .enriched_orders(&paid_filter)
        .await
        .expect("lookup succeeds");

    assert_eq!(orders.len(), 6);
    let peak = catalog.peak.load(Ordering::SeqCst);
    assert!(peak <= 2, "peak concurrency {peak} exceeded limit");
    assert!(peak >= 1);
}
