use serde::Serialize;
use utoipa::ToSchema;

pub const DETAIL_ROUTE_PREFIX: &str = "/products";

/// Receives "open this item" intents. Fire and forget.
pub trait NavigationSink: Send + Sync {
    fn navigate_to_detail(&self, slug: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavigationIntent {
    pub slug: String,
    pub path: String,
}

impl NavigationIntent {
    pub fn detail(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let path = detail_path(&slug);
        Self { slug, path }
    }
}

pub fn detail_path(slug: &str) -> String {
    format!("{DETAIL_ROUTE_PREFIX}/{slug}")
}
