use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::filters::{FilterState, FilterUpdate};
use crate::models::CatalogPage;
use crate::ports::{CatalogFetcher, NavigationSink};
use crate::view::CatalogView;

/// Identity of one dispatched fetch. Strictly increasing per controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchPhase {
    Pending,
    Success(CatalogPage),
    Error,
}

impl FetchPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchPhase::Pending)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub filters: FilterState,
    pub request: RequestToken,
    pub phase: FetchPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Discarded,
    Aborted,
}

#[derive(Debug)]
pub struct FetchHandle {
    request: RequestToken,
    task: JoinHandle<FetchOutcome>,
}

impl FetchHandle {
    pub fn request(&self) -> RequestToken {
        self.request
    }

    pub async fn outcome(self) -> FetchOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(request = self.request.value(), error = %err, "catalog fetch task failed");
                FetchOutcome::Aborted
            }
        }
    }
}

#[derive(Clone)]
pub struct CatalogViewController {
    fetcher: Arc<dyn CatalogFetcher>,
    navigator: Arc<dyn NavigationSink>,
    state: Arc<watch::Sender<CatalogState>>,
}

impl CatalogViewController {
    pub fn new(
        fetcher: Arc<dyn CatalogFetcher>,
        navigator: Arc<dyn NavigationSink>,
        filters: FilterState,
    ) -> Self {
        let (state, _) = watch::channel(CatalogState {
            filters,
            request: RequestToken::default(),
            phase: FetchPhase::Pending,
        });
        Self {
            fetcher,
            navigator,
            state: Arc::new(state),
        }
    }

    pub fn mount(&self) -> FetchHandle {
        self.set_filters(FilterUpdate::derive(FilterState::clone))
    }

    pub fn set_filters(&self, update: impl Into<FilterUpdate>) -> FetchHandle {
        let update = update.into();
        let mut filters = FilterState::default();
        let mut request = RequestToken::default();

        self.state.send_modify(|state| {
            state.filters = update.apply(&state.filters);
            state.request = state.request.next();
            state.phase = FetchPhase::Pending;
            filters = state.filters.clone();
            request = state.request;
        });

        self.dispatch(filters, request)
    }

    /// Changes only the page. No bounds check: callers go through enabled
    /// pagination controls.
    pub fn go_to_page(&self, page: u32) -> FetchHandle {
        self.set_filters(FilterUpdate::derive(move |prev| prev.with_page(page)))
    }

    pub fn select_item(&self, slug: &str) {
        tracing::info!(slug, "item selected");
        self.navigator.navigate_to_detail(slug);
    }

    pub fn filters(&self) -> FilterState {
        self.state.borrow().filters.clone()
    }

    pub fn phase(&self) -> FetchPhase {
        self.state.borrow().phase.clone()
    }

    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::render(&self.state.borrow())
    }

    fn dispatch(&self, filters: FilterState, request: RequestToken) -> FetchHandle {
        tracing::debug!(request = request.value(), page = filters.page, "fetching catalog");
        let fetcher = Arc::clone(&self.fetcher);
        let state = Arc::clone(&self.state);

        let task = tokio::spawn(async move {
            let phase = match fetcher.fetch(&filters).await {
                Ok(page) => FetchPhase::Success(page),
                Err(err) => {
                    tracing::warn!(request = request.value(), error = %err, "catalog fetch failed");
                    FetchPhase::Error
                }
            };

            let applied = state.send_if_modified(|current| {
                if current.request != request {
                    return false;
                }
                current.phase = phase;
                true
            });

            if applied {
                FetchOutcome::Applied
            } else {
                tracing::debug!(request = request.value(), "discarding stale catalog result");
                FetchOutcome::Discarded
            }
        });

        FetchHandle { request, task }
    }
}
