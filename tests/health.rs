use std::sync::Arc;

use axum::extract::State;
use catalog_view::{
    filters::FilterState, fixture::FixtureFetcher, history::NavigationHistory,
    routes::health::health_check, services::CatalogViewController, state::AppState,
};

#[tokio::test]
async fn health_check_returns_ok() {
    let history = Arc::new(NavigationHistory::new());
    let controller = CatalogViewController::new(
        Arc::new(FixtureFetcher::demo(6)),
        history.clone(),
        FilterState::default(),
    );
    let state = AppState {
        controller: controller.clone(),
        history,
    };

    let response = health_check(State(state.clone())).await;
    assert_eq!(response.0.message, "Health check");
    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.catalog, "pending");

    controller.mount().outcome().await;
    let data = health_check(State(state)).await.0.data.expect("health data");
    assert_eq!(data.catalog, "success");
}
