use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    filters::{FilterPatch, FilterState, PriceRange, SortKey},
    ports::NavigationIntent,
    response::{ApiResponse, Meta},
    routes::{catalog, health},
    services::{ItemViewModel, PageControl, PaginationControls},
    view::CatalogView,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::get_catalog,
        catalog::get_catalog_text,
        catalog::get_filters,
        catalog::replace_filters,
        catalog::patch_filters,
        catalog::go_to_page,
        catalog::previous_page,
        catalog::next_page,
        catalog::select_item,
        catalog::list_navigation
    ),
    components(
        schemas(
            FilterState,
            FilterPatch,
            PriceRange,
            SortKey,
            ItemViewModel,
            PageControl,
            PaginationControls,
            CatalogView,
            NavigationIntent,
            Meta,
            health::HealthData,
            ApiResponse<health::HealthData>,
            ApiResponse<CatalogView>,
            ApiResponse<FilterState>,
            ApiResponse<NavigationIntent>,
            ApiResponse<Vec<NavigationIntent>>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Catalog view, filters and pagination"),
        (name = "Navigation", description = "Item detail navigation intents")
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
