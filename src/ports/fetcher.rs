use async_trait::async_trait;
use thiserror::Error;

use crate::filters::FilterState;
use crate::models::CatalogPage;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Catalog page {0} is not available")]
    PageUnavailable(u32),

    #[error("Malformed catalog payload")]
    Payload(#[from] serde_json::Error),

    #[error("Catalog request failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(&self, filters: &FilterState) -> Result<CatalogPage, FetchError>;
}
