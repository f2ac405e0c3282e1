use std::sync::{Mutex, PoisonError};

use crate::ports::{NavigationIntent, NavigationSink};

#[derive(Debug, Default)]
pub struct NavigationHistory {
    entries: Mutex<Vec<NavigationIntent>>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<NavigationIntent> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<NavigationIntent> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl NavigationSink for NavigationHistory {
    fn navigate_to_detail(&self, slug: &str) {
        let intent = NavigationIntent::detail(slug);
        tracing::info!(path = %intent.path, "navigate");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(intent);
    }
}
