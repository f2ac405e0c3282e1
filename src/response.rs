use serde::Serialize;
use utoipa::ToSchema;

use crate::view::CatalogView;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<u32>,
    pub total_pages: Option<u32>,
    pub request: Option<u64>,
}

impl Meta {
    pub fn new(page: u32, total_pages: u32, request: u64) -> Self {
        Self {
            page: Some(page),
            total_pages: Some(total_pages),
            request: Some(request),
        }
    }

    pub fn for_view(view: &CatalogView, request: u64) -> Self {
        match view.pagination() {
            Some(pagination) => Self::new(pagination.current_page, pagination.total_pages, request),
            None => Self {
                request: Some(request),
                ..Self::empty()
            },
        }
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            total_pages: None,
            request: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
