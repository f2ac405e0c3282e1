pub mod fetcher;
pub mod navigation;

pub use fetcher::{CatalogFetcher, FetchError};
pub use navigation::{NavigationIntent, NavigationSink};
