use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const FIRST_PAGE: u32 = 1;

fn first_page() -> u32 {
    FIRST_PAGE
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Newest,
    PriceLowToHigh,
    PriceHighToLow,
    TopRated,
}

impl SortKey {
    pub fn as_query(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLowToHigh => "price_low_to_high",
            SortKey::PriceHighToLow => "price_high_to_low",
            SortKey::TopRated => "top_rated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterState {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<PriceRange>,
    #[serde(default)]
    pub sort: Option<SortKey>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub facets: BTreeMap<String, String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            price: None,
            sort: None,
            page: FIRST_PAGE,
            facets: BTreeMap::new(),
        }
    }
}

impl FilterState {
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category.as_ref().filter(|c| !c.is_empty()) {
            pairs.push(("category".to_string(), category.clone()));
        }
        if let Some(price) = self.price {
            pairs.push(("min_price".to_string(), price.min.to_string()));
            pairs.push(("max_price".to_string(), price.max.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort".to_string(), sort.as_query().to_string()));
        }
        pairs.push(("page".to_string(), self.page.to_string()));
        for (key, value) in &self.facets {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }

    /// Applies a filter-control change. Any change other than an explicit
    /// page resets the page to the first one.
    pub fn merge(&self, patch: FilterPatch) -> Self {
        let mut next = self.clone();
        let mut reset = false;

        if let Some(category) = patch.category {
            next.category = Some(category).filter(|c| !c.is_empty());
            reset = true;
        }
        if let Some(price) = patch.price {
            next.price = Some(price);
            reset = true;
        }
        if patch.clear_price {
            next.price = None;
            reset = true;
        }
        if let Some(sort) = patch.sort {
            next.sort = Some(sort);
            reset = true;
        }
        for (key, value) in patch.facets {
            if value.is_empty() {
                next.facets.remove(&key);
            } else {
                next.facets.insert(key, value);
            }
            reset = true;
        }

        next.page = match patch.page {
            Some(page) => page,
            None if reset => FIRST_PAGE,
            None => next.page,
        };
        next
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FilterPatch {
    pub category: Option<String>,
    pub price: Option<PriceRange>,
    #[serde(default)]
    pub clear_price: bool,
    pub sort: Option<SortKey>,
    pub page: Option<u32>,
    #[serde(default)]
    pub facets: BTreeMap<String, String>,
}

type DeriveFn = Box<dyn FnOnce(&FilterState) -> FilterState + Send>;

pub enum FilterUpdate {
    Replace(FilterState),
    Derive(DeriveFn),
}

impl FilterUpdate {
    pub fn derive<F>(f: F) -> Self
    where
        F: FnOnce(&FilterState) -> FilterState + Send + 'static,
    {
        FilterUpdate::Derive(Box::new(f))
    }

    pub fn apply(self, previous: &FilterState) -> FilterState {
        match self {
            FilterUpdate::Replace(next) => next,
            FilterUpdate::Derive(f) => f(previous),
        }
    }
}

impl From<FilterState> for FilterUpdate {
    fn from(filters: FilterState) -> Self {
        FilterUpdate::Replace(filters)
    }
}

impl From<FilterPatch> for FilterUpdate {
    fn from(patch: FilterPatch) -> Self {
        FilterUpdate::derive(move |prev| prev.merge(patch))
    }
}

impl fmt::Debug for FilterUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterUpdate::Replace(filters) => f.debug_tuple("Replace").field(filters).finish(),
            FilterUpdate::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}
