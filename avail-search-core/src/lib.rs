use nasa_images_fetch::{NormalizeMode, ResultItem, SearchParams};

// Type Aliases
pub type RequestId = u64;

// --- SearchStatus ---
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Submitting,
    Loaded,
    Failed(String),
}

impl SearchStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SearchStatus::Submitting)
    }
}

// --- SearchRequest & SearchResults ---
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub id: RequestId,
    pub params: SearchParams,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults {
    pub items: Vec<ResultItem>,
    pub total_hits: Option<u64>,
}

// --- AppState ---
#[derive(Debug, Clone)]
pub struct AppState {
    pub params: SearchParams,
    pub results: Vec<ResultItem>,
    pub total_hits: Option<u64>,
    pub status: SearchStatus,
    pub selected: Option<usize>,
    pub show_detail: bool,
    pub normalize_mode: NormalizeMode,
    latest_request_id: RequestId,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NormalizeMode::default())
    }
}

impl AppState {
    pub fn new(normalize_mode: NormalizeMode) -> Self {
        Self {
            params: SearchParams::default(),
            results: Vec::new(),
            total_hits: None,
            status: SearchStatus::Idle,
            selected: None,
            show_detail: false,
            normalize_mode,
            latest_request_id: 0,
        }
    }

    /// Starts a new submission. Any response for an earlier request id is
    /// rejected from now on.
    pub fn begin_search(&mut self) -> SearchRequest {
        self.latest_request_id += 1;
        self.status = SearchStatus::Submitting;
        SearchRequest {
            id: self.latest_request_id,
            params: self.params.clone(),
        }
    }

    /// Applies a finished request. Returns `false` when `request_id` is stale.
    ///
    /// Success replaces the whole result list. Failure keeps the previous list
    /// and records the message in [`SearchStatus::Failed`].
    pub fn apply_search_result(
        &mut self,
        request_id: RequestId,
        result: Result<SearchResults, String>,
    ) -> bool {
        if request_id != self.latest_request_id {
            tracing::debug!(
                "Dropping stale search response {} (latest is {})",
                request_id,
                self.latest_request_id
            );
            return false;
        }

        match result {
            Ok(results) => {
                self.results = results.items;
                self.total_hits = results.total_hits;
                self.selected = None;
                self.show_detail = false;
                self.status = SearchStatus::Loaded;
            }
            Err(message) => {
                self.status = SearchStatus::Failed(message);
            }
        }
        true
    }

    pub fn reset(&mut self) {
        self.params = SearchParams::default();
        self.results.clear();
        self.total_hits = None;
        self.selected = None;
        self.show_detail = false;
        self.status = SearchStatus::Idle;
        // Invalidate whatever is still in flight.
        self.latest_request_id += 1;
    }

    /// Opens the detail view. Only records carry enough metadata for it.
    pub fn select(&mut self, index: usize) -> bool {
        if self.normalize_mode != NormalizeMode::Records || index >= self.results.len() {
            return false;
        }
        self.selected = Some(index);
        self.show_detail = true;
        true
    }

    pub fn close_detail(&mut self) {
        self.show_detail = false;
        self.selected = None;
    }

    pub fn selected_item(&self) -> Option<&ResultItem> {
        self.selected.and_then(|index| self.results.get(index))
    }
}

// --- AppMessage ---
#[derive(Debug)]
pub enum AppMessage {
    SubmitSearch,
    ResetSearch,
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchResults, String>,
    },
}
