use crate::{Effect, JobListState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: JobListState, msg: Msg) -> (JobListState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshRequested => vec![Effect::FetchPage(state.begin_refresh())],
        Msg::LoadMoreRequested => match state.begin_load_more() {
            Some(request) => vec![Effect::FetchPage(request)],
            None => Vec::new(),
        },
        Msg::ResetRequested => {
            state.reset();
            Vec::new()
        }
        Msg::PageLoaded { request, page } => {
            state.apply_page(request, page);
            Vec::new()
        }
        Msg::PageFailed { request, error } => {
            state.apply_failure(request, error);
            Vec::new()
        }
    };

    (state, effects)
}
