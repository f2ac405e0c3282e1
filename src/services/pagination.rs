use serde::Serialize;
use utoipa::ToSchema;

use crate::models::PaginationMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageControl {
    pub enabled: bool,
    pub target_page: Option<u32>,
}

impl PageControl {
    const DISABLED: PageControl = PageControl {
        enabled: false,
        target_page: None,
    };

    pub fn target(&self) -> Option<u32> {
        self.target_page.filter(|_| self.enabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationControls {
    pub current_page: u32,
    pub total_pages: u32,
    pub previous: PageControl,
    pub next: PageControl,
    pub label: String,
}

impl PaginationControls {
    /// Controls mirror `has_prev_page`/`has_next_page` exactly; no clamping.
    /// Without metadata both controls are disabled and the counters read zero.
    pub fn from_meta(meta: Option<&PaginationMeta>) -> Self {
        let Some(meta) = meta else {
            return Self::empty();
        };
        Self {
            current_page: meta.current_page,
            total_pages: meta.total_pages,
            previous: PageControl {
                enabled: meta.has_prev_page,
                target_page: meta.current_page.checked_sub(1),
            },
            next: PageControl {
                enabled: meta.has_next_page,
                target_page: meta.current_page.checked_add(1),
            },
            label: page_label(meta.current_page, meta.total_pages),
        }
    }

    pub fn empty() -> Self {
        Self {
            current_page: 0,
            total_pages: 0,
            previous: PageControl::DISABLED,
            next: PageControl::DISABLED,
            label: page_label(0, 0),
        }
    }
}

fn page_label(current: u32, total: u32) -> String {
    format!("Page {current} of {total}")
}
