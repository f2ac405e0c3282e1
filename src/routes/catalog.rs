use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    error::{AppError, AppResult},
    filters::{FilterPatch, FilterState},
    ports::NavigationIntent,
    response::{ApiResponse, Meta},
    services::{FetchHandle, FetchOutcome},
    state::AppState,
    view::CatalogView,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_catalog))
        .route("/text", get(get_catalog_text))
        .route(
            "/filters",
            get(get_filters).put(replace_filters).patch(patch_filters),
        )
        .route("/page/{page}", post(go_to_page))
        .route("/previous", post(previous_page))
        .route("/next", post(next_page))
        .route("/items/{slug}/select", post(select_item))
}

fn render(state: &AppState, message: &str) -> Json<ApiResponse<CatalogView>> {
    let snapshot = state.controller.snapshot();
    let view = CatalogView::render(&snapshot);
    let meta = Meta::for_view(&view, snapshot.request.value());
    Json(ApiResponse::success(message, view, Some(meta)))
}

async fn settle(handle: FetchHandle) {
    let request = handle.request().value();
    let outcome = handle.outcome().await;
    if outcome != FetchOutcome::Applied {
        tracing::debug!(request, ?outcome, "fetch did not update the view");
    }
}

#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "Current catalog view", body = ApiResponse<CatalogView>)
    ),
    tag = "Catalog"
)]
pub async fn get_catalog(State(state): State<AppState>) -> Json<ApiResponse<CatalogView>> {
    render(&state, "Catalog")
}

#[utoipa::path(
    get,
    path = "/api/catalog/text",
    responses(
        (status = 200, description = "Plain text rendering of the catalog view", body = String)
    ),
    tag = "Catalog"
)]
pub async fn get_catalog_text(State(state): State<AppState>) -> String {
    state.controller.view().to_string()
}

#[utoipa::path(
    get,
    path = "/api/catalog/filters",
    responses(
        (status = 200, description = "Current filters", body = ApiResponse<FilterState>)
    ),
    tag = "Catalog"
)]
pub async fn get_filters(State(state): State<AppState>) -> Json<ApiResponse<FilterState>> {
    Json(ApiResponse::success(
        "Filters",
        state.controller.filters(),
        Some(Meta::empty()),
    ))
}

#[utoipa::path(
    put,
    path = "/api/catalog/filters",
    request_body = FilterState,
    responses(
        (status = 200, description = "Filters replaced", body = ApiResponse<CatalogView>),
        (status = 400, description = "Page must be at least 1"),
    ),
    tag = "Catalog"
)]
pub async fn replace_filters(
    State(state): State<AppState>,
    Json(filters): Json<FilterState>,
) -> AppResult<Json<ApiResponse<CatalogView>>> {
    if filters.page == 0 {
        return Err(AppError::BadRequest("page must be at least 1".into()));
    }
    settle(state.controller.set_filters(filters)).await;
    Ok(render(&state, "Filters replaced"))
}

#[utoipa::path(
    patch,
    path = "/api/catalog/filters",
    request_body = FilterPatch,
    responses(
        (status = 200, description = "Filters updated", body = ApiResponse<CatalogView>),
        (status = 400, description = "Page must be at least 1"),
    ),
    tag = "Catalog"
)]
pub async fn patch_filters(
    State(state): State<AppState>,
    Json(patch): Json<FilterPatch>,
) -> AppResult<Json<ApiResponse<CatalogView>>> {
    if patch.page == Some(0) {
        return Err(AppError::BadRequest("page must be at least 1".into()));
    }
    settle(state.controller.set_filters(patch)).await;
    Ok(render(&state, "Filters updated"))
}

#[utoipa::path(
    post,
    path = "/api/catalog/page/{page}",
    params(
        ("page" = u32, Path, description = "Page number, starting at 1")
    ),
    responses(
        (status = 200, description = "Page requested", body = ApiResponse<CatalogView>),
        (status = 400, description = "Page must be at least 1"),
    ),
    tag = "Catalog"
)]
pub async fn go_to_page(
    State(state): State<AppState>,
    Path(page): Path<u32>,
) -> AppResult<Json<ApiResponse<CatalogView>>> {
    if page == 0 {
        return Err(AppError::BadRequest("page must be at least 1".into()));
    }
    settle(state.controller.go_to_page(page)).await;
    Ok(render(&state, "Page requested"))
}

#[utoipa::path(
    post,
    path = "/api/catalog/previous",
    responses(
        (status = 200, description = "Previous page requested", body = ApiResponse<CatalogView>),
        (status = 409, description = "Previous control is disabled"),
    ),
    tag = "Catalog"
)]
pub async fn previous_page(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CatalogView>>> {
    let target = state
        .controller
        .view()
        .pagination()
        .and_then(|pagination| pagination.previous.target())
        .ok_or_else(|| AppError::Conflict("there is no previous page".into()))?;
    settle(state.controller.go_to_page(target)).await;
    Ok(render(&state, "Previous page requested"))
}

#[utoipa::path(
    post,
    path = "/api/catalog/next",
    responses(
        (status = 200, description = "Next page requested", body = ApiResponse<CatalogView>),
        (status = 409, description = "Next control is disabled"),
    ),
    tag = "Catalog"
)]
pub async fn next_page(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CatalogView>>> {
    let target = state
        .controller
        .view()
        .pagination()
        .and_then(|pagination| pagination.next.target())
        .ok_or_else(|| AppError::Conflict("there is no next page".into()))?;
    settle(state.controller.go_to_page(target)).await;
    Ok(render(&state, "Next page requested"))
}

#[utoipa::path(
    post,
    path = "/api/catalog/items/{slug}/select",
    params(
        ("slug" = String, Path, description = "Item slug")
    ),
    responses(
        (status = 200, description = "Navigation intent emitted", body = ApiResponse<NavigationIntent>)
    ),
    tag = "Catalog"
)]
pub async fn select_item(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<ApiResponse<NavigationIntent>> {
    state.controller.select_item(&slug);
    Json(ApiResponse::success(
        "Navigating",
        NavigationIntent::detail(slug),
        Some(Meta::empty()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Navigation intents in order", body = ApiResponse<Vec<NavigationIntent>>)
    ),
    tag = "Navigation"
)]
pub async fn list_navigation(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<NavigationIntent>>> {
    Json(ApiResponse::success(
        "Navigation history",
        state.history.entries(),
        Some(Meta::empty()),
    ))
}
