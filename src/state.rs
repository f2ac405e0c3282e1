use std::sync::Arc;

use crate::history::NavigationHistory;
use crate::services::CatalogViewController;

#[derive(Clone)]
pub struct AppState {
    pub controller: CatalogViewController,
    pub history: Arc<NavigationHistory>,
}
