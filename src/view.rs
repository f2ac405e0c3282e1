use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

use crate::services::catalog_controller::{CatalogState, FetchPhase};
use crate::services::item_view::{ItemViewModel, build_item_views};
use crate::services::pagination::{PageControl, PaginationControls};

pub const FAILURE_NOTICE: &str = "Failed to load products. Please try again later.";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum CatalogView {
    Loading,
    Failed {
        notice: String,
    },
    Loaded {
        items: Vec<ItemViewModel>,
        pagination: PaginationControls,
    },
}

impl CatalogView {
    pub fn render(state: &CatalogState) -> Self {
        match &state.phase {
            FetchPhase::Pending => CatalogView::Loading,
            FetchPhase::Error => CatalogView::Failed {
                notice: FAILURE_NOTICE.to_string(),
            },
            FetchPhase::Success(page) => CatalogView::Loaded {
                items: build_item_views(&page.items),
                pagination: PaginationControls::from_meta(page.pagination.as_ref()),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogView::Loading)
    }

    pub fn items(&self) -> &[ItemViewModel] {
        match self {
            CatalogView::Loaded { items, .. } => items,
            _ => &[],
        }
    }

    pub fn pagination(&self) -> Option<&PaginationControls> {
        match self {
            CatalogView::Loaded { pagination, .. } => Some(pagination),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogView::Loading => writeln!(f, "Loading..."),
            CatalogView::Failed { notice } => writeln!(f, "{notice}"),
            CatalogView::Loaded { items, pagination } => {
                writeln!(f, "Our Products")?;
                for item in items {
                    writeln!(f)?;
                    write_item(f, item)?;
                }
                writeln!(f)?;
                writeln!(
                    f,
                    "{} | {} | {}",
                    control_text("Previous", &pagination.previous),
                    pagination.label,
                    control_text("Next", &pagination.next),
                )
            }
        }
    }
}

fn write_item(f: &mut fmt::Formatter<'_>, item: &ItemViewModel) -> fmt::Result {
    writeln!(f, "{}", item.name)?;
    if !item.description.is_empty() {
        writeln!(f, "  {}", item.description)?;
    }
    writeln!(f, "  Rating {} {}", item.rating, item.review_label)?;
    writeln!(f, "  {}", item.sizes_label)?;
    if let Some(discount) = &item.discount_label {
        writeln!(f, "  {discount}")?;
    }
    writeln!(f, "  {}", item.price_label)
}

fn control_text(name: &str, control: &PageControl) -> String {
    if control.enabled {
        format!("[{name}]")
    } else {
        format!("({name})")
    }
}
