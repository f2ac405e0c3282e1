use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::RawCatalogItem;
use crate::ports::navigation::detail_path;

#[derive(Debug, Error)]
pub enum SizeDecodeError {
    #[error("size field is missing")]
    Missing,

    #[error("size field is not a sequence")]
    NotASequence,

    #[error("size sequence is empty")]
    Empty,

    #[error("size encoding is malformed")]
    Malformed(#[from] serde_json::Error),

    #[error("decoded sizes have the wrong shape")]
    WrongShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ItemViewModel {
    pub key: String,
    pub id: Option<String>,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub primary_image: Option<String>,
    pub image_alt: String,
    pub rating: f64,
    pub review_count: u64,
    pub review_label: String,
    pub price: f64,
    pub price_label: String,
    pub discount: f64,
    pub has_discount: bool,
    pub discount_label: Option<String>,
    pub sizes: Vec<String>,
    pub sizes_label: String,
    pub detail_path: String,
}

/// Decodes the size field. The wire shape is a non-empty array whose first
/// element is a string holding a JSON array of sizes.
pub fn decode_sizes(raw: Option<&Value>) -> Result<Vec<String>, SizeDecodeError> {
    let entries = match raw {
        None | Some(Value::Null) => return Err(SizeDecodeError::Missing),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(SizeDecodeError::NotASequence),
    };
    let encoded = match entries.first() {
        None => return Err(SizeDecodeError::Empty),
        Some(Value::String(encoded)) => encoded,
        Some(_) => return Err(SizeDecodeError::WrongShape),
    };

    let decoded: Value = serde_json::from_str(encoded)?;
    let Value::Array(sizes) = decoded else {
        return Err(SizeDecodeError::WrongShape);
    };

    sizes
        .into_iter()
        .map(|size| match size {
            Value::String(size) => Ok(size),
            Value::Number(size) => Ok(number_text(&size)),
            _ => Err(SizeDecodeError::WrongShape),
        })
        .collect()
}

// Integral floats print without a fractional part: 7.0 reads as "7".
fn number_text(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() => value.to_string(),
        _ => number.to_string(),
    }
}

pub fn parse_sizes(item: &RawCatalogItem) -> Vec<String> {
    match decode_sizes(item.sizes.as_ref()) {
        Ok(sizes) => sizes,
        Err(SizeDecodeError::Missing) => Vec::new(),
        Err(err) => {
            tracing::debug!(slug = %item.slug, error = %err, "ignoring undecodable sizes");
            Vec::new()
        }
    }
}

pub fn build_item_view(index: usize, item: &RawCatalogItem) -> ItemViewModel {
    let sizes = parse_sizes(item);
    let has_discount = item.discount > 0.0;
    let key = item
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| index.to_string());

    ItemViewModel {
        key,
        id: item.id.clone(),
        slug: item.slug.clone(),
        name: item.name.clone(),
        description: item.description.clone(),
        images: item.images.clone(),
        primary_image: item.images.first().cloned(),
        image_alt: item.name.clone(),
        rating: item.rating,
        review_count: item.review_count,
        review_label: review_label(item.review_count),
        price: item.price,
        price_label: format!("Rs. {}", item.price),
        discount: item.discount,
        has_discount,
        discount_label: has_discount.then(|| format!("Discount: {}%", item.discount)),
        sizes_label: format!("Sizes: {}", sizes.join(", ")),
        sizes,
        detail_path: detail_path(&item.slug),
    }
}

pub fn build_item_views(items: &[RawCatalogItem]) -> Vec<ItemViewModel> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| build_item_view(index, item))
        .collect()
}

fn review_label(count: u64) -> String {
    if count == 1 {
        "(1 review)".to_string()
    } else {
        format!("({count} reviews)")
    }
}
