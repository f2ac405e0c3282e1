use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::filters::FilterState;
use crate::models::{CatalogPage, CatalogPayload, PaginationMeta, RawCatalogItem};
use crate::ports::{CatalogFetcher, FetchError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureFile {
    pub pages: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct FixtureFetcher {
    pages: Vec<Value>,
    delay: Duration,
}

impl FixtureFetcher {
    pub fn new(pages: Vec<Value>) -> Self {
        Self {
            pages,
            delay: Duration::ZERO,
        }
    }

    pub fn demo(page_size: usize) -> Self {
        Self::new(demo_payloads(page_size))
    }

    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading fixture {}", path.display()))?;
        let file: FixtureFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing fixture {}", path.display()))?;
        tracing::info!(path = %path.display(), pages = file.pages.len(), "loaded catalog fixture");
        Ok(Self::new(file.pages))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[async_trait]
impl CatalogFetcher for FixtureFetcher {
    async fn fetch(&self, filters: &FilterState) -> Result<CatalogPage, FetchError> {
        tracing::debug!(query = ?filters.to_query_pairs(), "fixture fetch");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let index = (filters.page as usize)
            .checked_sub(1)
            .ok_or(FetchError::PageUnavailable(filters.page))?;
        let payload = self
            .pages
            .get(index)
            .cloned()
            .ok_or(FetchError::PageUnavailable(filters.page))?;

        Ok(CatalogPage::from_payload(payload)?)
    }
}

pub fn demo_payloads(page_size: usize) -> Vec<Value> {
    let items = demo_items();
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size) as u32;

    items
        .chunks(page_size)
        .enumerate()
        .map(|(index, chunk)| {
            let page = CatalogPage::new(
                chunk.to_vec(),
                PaginationMeta::for_page(index as u32 + 1, total_pages),
            );
            serde_json::to_value(CatalogPayload::from(page)).unwrap_or(Value::Null)
        })
        .collect()
}

fn demo_items() -> Vec<RawCatalogItem> {
    let products = [
        ("Classic Cotton Tee", 799.0, 4.5, 12, 0.0, json!(["[\"S\",\"M\",\"L\",\"XL\"]"])),
        ("Slim Fit Denim", 2499.0, 4.2, 8, 10.0, json!(["[\"30\",\"32\",\"34\"]"])),
        ("Linen Summer Shirt", 1599.0, 3.9, 1, 0.0, json!(["[\"M\",\"L\"]"])),
        ("Wool Blend Overcoat", 6999.0, 4.8, 21, 25.0, json!(["[\"M\",\"L\",\"XL\"]"])),
        ("Canvas Sneakers", 1899.0, 4.0, 0, 0.0, json!(["[7,8,9,10]"])),
        ("Leather Belt", 899.0, 4.3, 5, 5.0, Value::Null),
        ("Hooded Sweatshirt", 1799.0, 4.6, 34, 15.0, json!(["[\"S\",\"M\",\"L\"]"])),
        ("Cargo Shorts", 1199.0, 3.7, 3, 0.0, json!(["S, M, L"])),
        ("Rain Jacket", 3499.0, 4.1, 9, 20.0, json!(["[\"M\",\"L\"]"])),
        ("Knit Beanie", 499.0, 4.9, 2, 0.0, json!("one-size")),
        ("Chino Trousers", 1999.0, 4.4, 14, 0.0, json!(["[\"30\",\"32\",\"34\",\"36\"]"])),
        ("Running Socks (3 pack)", 399.0, 4.0, 1, 12.5, json!([])),
        ("Oxford Button-Down", 1699.0, 4.2, 6, 0.0, json!(["[\"S\",\"M\",\"L\",\"XL\"]"])),
        ("Puffer Vest", 2799.0, 4.5, 11, 30.0, json!(["[\"M\",\"L\",\"XL\"]"])),
    ];

    products
        .into_iter()
        .enumerate()
        .map(|(index, (name, price, rating, reviews, discount, sizes))| {
            let slug = slugify(name);
            RawCatalogItem {
                id: Some(format!("demo-{:04}", index + 1)),
                images: vec![
                    format!("/images/{slug}-1.jpg"),
                    format!("/images/{slug}-2.jpg"),
                ],
                description: format!("{name} from the demo catalog."),
                slug,
                name: name.to_string(),
                rating,
                review_count: reviews,
                price,
                discount,
                sizes: Some(sizes).filter(|s| !s.is_null()),
            }
        })
        .collect()
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
