pub mod catalog_controller;
pub mod item_view;
pub mod pagination;

pub use catalog_controller::{
    CatalogState, CatalogViewController, FetchHandle, FetchOutcome, FetchPhase, RequestToken,
};
pub use item_view::{ItemViewModel, SizeDecodeError, build_item_view, build_item_views, decode_sizes, parse_sizes};
pub use pagination::{PageControl, PaginationControls};
