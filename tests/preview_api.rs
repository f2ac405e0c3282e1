use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use catalog_view::{
    error::AppError,
    filters::{FilterPatch, FilterState},
    fixture::{FixtureFetcher, FixtureFile, demo_payloads},
    history::NavigationHistory,
    routes::catalog,
    services::CatalogViewController,
    state::AppState,
    view::CatalogView,
};

async fn mounted_state(page_size: usize) -> AppState {
    let history = Arc::new(NavigationHistory::new());
    let controller = CatalogViewController::new(
        Arc::new(FixtureFetcher::demo(page_size)),
        history.clone(),
        FilterState::default(),
    );
    controller.mount().outcome().await;
    AppState {
        controller,
        history,
    }
}

#[tokio::test]
async fn catalog_reports_view_and_meta() {
    let state = mounted_state(6).await;

    let response = catalog::get_catalog(State(state)).await.0;
    let view = response.data.expect("view");
    assert_eq!(view.items().len(), 6);
    let meta = response.meta.expect("meta");
    assert_eq!(meta.page, Some(1));
    assert_eq!(meta.total_pages, Some(3));
    assert_eq!(meta.request, Some(1));
}

#[tokio::test]
async fn next_and_previous_follow_the_controls() -> anyhow::Result<()> {
    let state = mounted_state(6).await;

    let previous = catalog::previous_page(State(state.clone())).await;
    assert!(matches!(previous, Err(AppError::Conflict(_))));

    let view = catalog::next_page(State(state.clone())).await?.0.data.expect("view");
    assert_eq!(view.pagination().map(|p| p.label.as_str()), Some("Page 2 of 3"));

    let third = catalog::next_page(State(state.clone())).await?.0;
    assert_eq!(third.meta.and_then(|meta| meta.page), Some(3));
    let last = catalog::next_page(State(state.clone())).await;
    assert!(matches!(last, Err(AppError::Conflict(_))));

    let view = catalog::previous_page(State(state)).await?.0.data.expect("view");
    assert_eq!(view.pagination().map(|p| p.current_page), Some(2));
    Ok(())
}

#[tokio::test]
async fn page_out_of_range_shows_failure() -> anyhow::Result<()> {
    let state = mounted_state(6).await;

    let view = catalog::go_to_page(State(state.clone()), Path(9))
        .await?
        .0
        .data
        .expect("view");
    assert!(matches!(view, CatalogView::Failed { .. }));

    let zero = catalog::go_to_page(State(state), Path(0)).await;
    let Err(err) = zero else {
        panic!("page 0 must be rejected");
    };
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn patching_filters_resets_the_page() -> anyhow::Result<()> {
    let state = mounted_state(6).await;
    let moved = catalog::go_to_page(State(state.clone()), Path(3)).await?.0;
    assert_eq!(moved.meta.and_then(|meta| meta.page), Some(3));

    let patched = catalog::patch_filters(
        State(state.clone()),
        Json(FilterPatch {
            category: Some("outerwear".into()),
            ..FilterPatch::default()
        }),
    )
    .await?
    .0;
    assert_eq!(patched.meta.and_then(|meta| meta.page), Some(1));

    let filters = catalog::get_filters(State(state)).await.0.data.expect("filters");
    assert_eq!(filters.page, 1);
    assert_eq!(filters.category.as_deref(), Some("outerwear"));
    Ok(())
}

#[tokio::test]
async fn replacing_filters_rejects_page_zero() {
    let state = mounted_state(6).await;
    let result = catalog::replace_filters(
        State(state.clone()),
        Json(FilterState {
            page: 0,
            ..FilterState::default()
        }),
    )
    .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(state.controller.filters().page, 1);
}

#[tokio::test]
async fn selecting_an_item_records_navigation() {
    let state = mounted_state(6).await;
    let slug = state.controller.view().items()[0].slug.clone();

    let intent = catalog::select_item(State(state.clone()), Path(slug.clone()))
        .await
        .0
        .data
        .expect("intent");
    assert_eq!(intent.path, format!("/products/{slug}"));

    let history = catalog::list_navigation(State(state)).await.0.data.expect("history");
    assert_eq!(history, vec![intent]);
}

#[tokio::test]
async fn text_rendering_lists_items_and_controls() {
    let state = mounted_state(6).await;
    let text = catalog::get_catalog_text(State(state)).await;

    assert!(text.starts_with("Our Products"));
    assert!(text.contains("Classic Cotton Tee"));
    assert!(text.contains("Sizes: S, M, L, XL"));
    assert!(text.contains("(Previous) | Page 1 of 3 | [Next]"));
}

#[tokio::test]
async fn demo_catalog_isolates_bad_sizes() {
    let state = mounted_state(14).await;
    let view = state.controller.view();
    assert_eq!(view.items().len(), 14);

    let sizes_of = |slug: &str| {
        view.items()
            .iter()
            .find(|item| item.slug == slug)
            .map(|item| item.sizes.clone())
            .expect("item present")
    };
    assert_eq!(sizes_of("canvas-sneakers"), vec!["7", "8", "9", "10"]);
    assert!(sizes_of("cargo-shorts").is_empty());
    assert!(sizes_of("knit-beanie").is_empty());
    assert!(sizes_of("leather-belt").is_empty());
    assert_eq!(sizes_of("puffer-vest"), vec!["M", "L", "XL"]);
}

#[tokio::test]
async fn fixture_files_load_from_disk() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("catalog-fixture-{}.json", std::process::id()));
    let file = FixtureFile {
        pages: demo_payloads(5),
    };
    tokio::fs::write(&path, serde_json::to_string(&file)?).await?;

    let fetcher = FixtureFetcher::load(&path).await?;
    assert_eq!(fetcher.page_count(), 3);

    let missing = FixtureFetcher::load(path.with_extension("missing")).await;
    assert!(missing.is_err());

    tokio::fs::remove_file(&path).await?;
    Ok(())
}

#[tokio::test]
async fn demo_pages_carry_consistent_pagination() {
    let pages = demo_payloads(4);
    assert_eq!(pages.len(), 4);
    for (index, payload) in pages.into_iter().enumerate() {
        let page = catalog_view::models::CatalogPage::from_payload(payload).unwrap();
        let meta = page.pagination.expect("pagination");
        assert_eq!(meta.current_page as usize, index + 1);
        assert_eq!(meta.total_pages, 4);
        assert_eq!(meta.has_prev_page, index > 0);
        assert_eq!(meta.has_next_page, index < 3);
    }
}

#[test]
fn unknown_routes_answer_not_found() {
    let response = AppError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
