use jobboard_core::{update, Effect, JobListState, JobListView, JobPage, Msg, PageRequest};

fn expect_fetch(effects: &[Effect]) -> PageRequest {
    match effects {
        [Effect::FetchPage(request)] => *request,
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

#[test]
fn initial_state_is_empty() {
    let view = JobListState::default().view();
    assert_eq!(view, JobListView::default());
}

#[test]
fn load_more_before_first_page_is_noop() {
    let (state, effects) = update(JobListState::default(), Msg::LoadMoreRequested);
    assert!(effects.is_empty());
    assert!(!state.is_loading());
}

#[test]
fn load_more_while_in_flight_is_noop() {
    let (state, effects) = update(JobListState::new(1), Msg::RefreshRequested);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request: expect_fetch(&effects),
            page: JobPage {
                items: vec![],
                total: 0,
            },
        },
    );
    // Nothing to load after an empty first page.
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(effects.len(), 1);
    let (_state, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn failed_page_keeps_previous_jobs_and_records_error() {
    let (state, effects) = update(JobListState::new(1), Msg::RefreshRequested);
    let first = expect_fetch(&effects);
    let (state, _) = update(
        state,
        Msg::PageFailed {
            request: first,
            error: "http status 500".to_string(),
        },
    );

    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.last_error.as_deref(), Some("http status 500"));
    assert_eq!(view.page_cursor, None);
}

#[test]
fn stale_answers_are_dropped() {
    let (state, effects) = update(JobListState::new(1), Msg::RefreshRequested);
    let stale = expect_fetch(&effects);
    let (state, effects) = update(state, Msg::RefreshRequested);
    let current = expect_fetch(&effects);
    assert_ne!(stale, current);

    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request: stale,
            page: JobPage {
                items: vec![],
                total: 99,
            },
        },
    );
    assert!(state.is_loading());
    assert_eq!(state.view().total_available, 0);
}

#[test]
fn reset_drops_in_flight_request() {
    let (state, effects) = update(JobListState::new(1), Msg::RefreshRequested);
    let request = expect_fetch(&effects);
    let (state, effects) = update(state, Msg::ResetRequested);
    assert!(effects.is_empty());
    assert!(!state.is_loading());

    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request,
            page: JobPage {
                items: vec![],
                total: 5,
            },
        },
    );
    assert_eq!(state.view(), JobListView::default());
    assert_eq!(state.page_size(), 1);
}
