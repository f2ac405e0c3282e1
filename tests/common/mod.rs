#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog_view::{
    filters::FilterState,
    models::{CatalogPage, PaginationMeta, RawCatalogItem},
    ports::{CatalogFetcher, FetchError},
};
use serde_json::{Value, json};
use tokio::sync::oneshot;

pub type Reply = Result<CatalogPage, FetchError>;

/// Fetcher whose responses are released by the test, keyed by requested page.
#[derive(Default)]
pub struct GatedFetcher {
    gates: Mutex<HashMap<u32, oneshot::Receiver<Reply>>>,
    calls: Mutex<Vec<FilterState>>,
}

impl GatedFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers the response slot for `page`; send on the returned sender to resolve it.
    pub fn gate(&self, page: u32) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(page, rx);
        tx
    }

    pub fn calls(&self) -> Vec<FilterState> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogFetcher for GatedFetcher {
    async fn fetch(&self, filters: &FilterState) -> Reply {
        self.calls.lock().unwrap().push(filters.clone());
        let gate = self.gates.lock().unwrap().remove(&filters.page);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Transport("gate dropped".into()))),
            None => Err(FetchError::PageUnavailable(filters.page)),
        }
    }
}

/// Fetcher that always fails.
pub struct FailingFetcher;

#[async_trait]
impl CatalogFetcher for FailingFetcher {
    async fn fetch(&self, _filters: &FilterState) -> Reply {
        Err(FetchError::Transport("connection refused".into()))
    }
}

pub fn item(slug: &str, sizes: Option<Value>) -> RawCatalogItem {
    RawCatalogItem {
        id: Some(format!("id-{slug}")),
        slug: slug.to_string(),
        name: slug.replace('-', " "),
        description: format!("About {slug}"),
        images: vec![format!("/img/{slug}.jpg")],
        rating: 4.0,
        review_count: 3,
        price: 1000.0,
        discount: 0.0,
        sizes,
    }
}

pub fn items(prefix: &str, count: usize) -> Vec<RawCatalogItem> {
    (1..=count)
        .map(|n| item(&format!("{prefix}-{n}"), Some(json!(["[\"S\",\"M\"]"]))))
        .collect()
}

pub fn page(prefix: &str, count: usize, current: u32, total: u32) -> CatalogPage {
    CatalogPage::new(items(prefix, count), PaginationMeta::for_page(current, total))
}

/// Wire payload for a page, as a remote source would send it.
pub fn payload(prefix: &str, count: usize, current: u32, total: u32) -> Value {
    let page = page(prefix, count, current, total);
    json!({
        "data": { "products": page.items },
        "pagination": page.pagination,
    })
}
