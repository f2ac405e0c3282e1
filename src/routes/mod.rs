use axum::{Router, routing::get};

use crate::state::AppState;

pub mod catalog;
pub mod doc;
pub mod health;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .route("/navigation", get(catalog::list_navigation))
}
