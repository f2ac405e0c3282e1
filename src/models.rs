use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCatalogItem {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_id"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub images: Vec<String>,
    #[serde(rename = "ratings", deserialize_with = "lenient_f64")]
    pub rating: f64,
    #[serde(rename = "numReviews", deserialize_with = "lenient_count")]
    pub review_count: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Value>,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().unwrap_or_default(),
        Value::String(text) => text.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if let Some(count) = value.as_u64() {
        return Ok(count);
    }
    let count = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(count
        .filter(|count| count.is_finite() && *count >= 0.0 && count.fract() == 0.0)
        .map(|count| count as u64)
        .unwrap_or_default())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl PaginationMeta {
    pub fn for_page(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            has_prev_page: current_page > 1,
            has_next_page: current_page < total_pages,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<RawCatalogItem>,
    pub pagination: Option<PaginationMeta>,
}

impl CatalogPage {
    pub fn new(items: Vec<RawCatalogItem>, pagination: PaginationMeta) -> Self {
        Self {
            items,
            pagination: Some(pagination),
        }
    }

    // Missing sections decode to no items and no metadata.
    pub fn from_payload(payload: Value) -> Result<Self, serde_json::Error> {
        let payload: CatalogPayload = serde_json::from_value(payload)?;
        Ok(payload.into())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogPayload {
    #[serde(default)]
    pub data: Option<CatalogData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default, deserialize_with = "lenient_items")]
    pub products: Option<Vec<RawCatalogItem>>,
}

// Items decode one at a time; an entry that is not an item at all is dropped
// without touching its siblings.
fn lenient_items<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<RawCatalogItem>>, D::Error> {
    let Some(entries) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let items = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping undecodable catalog item");
                None
            }
        })
        .collect();
    Ok(Some(items))
}

impl From<CatalogPayload> for CatalogPage {
    fn from(payload: CatalogPayload) -> Self {
        Self {
            items: payload
                .data
                .and_then(|data| data.products)
                .unwrap_or_default(),
            pagination: payload.pagination,
        }
    }
}

impl From<CatalogPage> for CatalogPayload {
    fn from(page: CatalogPage) -> Self {
        Self {
            data: Some(CatalogData {
                products: Some(page.items),
            }),
            pagination: page.pagination,
        }
    }
}
