use std::sync::{Mutex, MutexGuard, PoisonError};

use jobboard_core::{update, Effect, JobListState, JobListView, Msg, PageRequest};
use jobboard_logging::{board_debug, board_info, board_warn};

use crate::{FetchError, JobSource};

/// Accumulates pages from a [`JobSource`] into one growing, duplicate-free list.
///
/// Methods take `&self` so one aggregator can be shared between tasks. The state
/// lock is never held across an `.await`; a request already in flight turns
/// `load_next_page` into a no-op.
pub struct JobListAggregator<S> {
    source: S,
    state: Mutex<JobListState>,
}

impl<S: JobSource> JobListAggregator<S> {
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            state: Mutex::new(JobListState::new(page_size)),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn view(&self) -> JobListView {
        self.lock_state().view()
    }

    /// Fetches page 0 and, on success, replaces everything accumulated so far.
    pub async fn load_first_page(&self) -> Result<JobListView, FetchError> {
        self.run(Msg::RefreshRequested).await
    }

    /// Fetches and appends the next page, unless a fetch is in flight or nothing is left.
    pub async fn load_next_page(&self) -> Result<JobListView, FetchError> {
        self.run(Msg::LoadMoreRequested).await
    }

    pub fn reset(&self) {
        self.dispatch(Msg::ResetRequested);
        board_debug!("Job list reset");
    }

    async fn run(&self, msg: Msg) -> Result<JobListView, FetchError> {
        let effects = self.dispatch(msg);
        if effects.is_empty() {
            board_debug!("Job list request ignored (loading or exhausted)");
        }

        for effect in effects {
            match effect {
                Effect::FetchPage(request) => {
                    let pending = PendingPage::new(self, request);
                    let result = self
                        .source
                        .fetch_page(request.page_num, request.page_size)
                        .await;
                    pending.disarm();
                    match result {
                        Ok(page) => {
                            let received = page.items.len();
                            self.dispatch(Msg::PageLoaded { request, page });
                            board_info!(
                                "Loaded page {} with {} jobs",
                                request.page_num,
                                received
                            );
                        }
                        Err(err) => {
                            board_warn!("Loading page {} failed: {}", request.page_num, err);
                            self.dispatch(Msg::PageFailed {
                                request,
                                error: err.to_string(),
                            });
                            return Err(err);
                        }
                    }
                }
            }
        }

        Ok(self.view())
    }

    fn dispatch(&self, msg: Msg) -> Vec<Effect> {
        let mut guard = self.lock_state();
        let state = std::mem::take(&mut *guard);
        let (next, effects) = update(state, msg);
        *guard = next;
        effects
    }

    fn lock_state(&self) -> MutexGuard<'_, JobListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the in-flight marker if the caller drops the future mid-fetch.
struct PendingPage<'a, S: JobSource> {
    aggregator: &'a JobListAggregator<S>,
    request: Option<PageRequest>,
}

impl<'a, S: JobSource> PendingPage<'a, S> {
    fn new(aggregator: &'a JobListAggregator<S>, request: PageRequest) -> Self {
        Self {
            aggregator,
            request: Some(request),
        }
    }

    fn disarm(mut self) {
        self.request = None;
    }
}

impl<S: JobSource> Drop for PendingPage<'_, S> {
    fn drop(&mut self) {
        if let Some(request) = self.request.take() {
            board_warn!("Loading page {} was cancelled", request.page_num);
            self.aggregator.dispatch(Msg::PageFailed {
                request,
                error: "cancelled".to_string(),
            });
        }
    }
}
