#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Load page 0 and replace whatever has been accumulated so far.
    RefreshRequested,
    /// Load the next sequential page, if one exists and nothing is in flight.
    LoadMoreRequested,
    /// Drop accumulated state without fetching.
    ResetRequested,
    /// The listing source answered a request.
    PageLoaded {
        request: crate::PageRequest,
        page: crate::JobPage,
    },
    /// The listing source failed a request.
    PageFailed {
        request: crate::PageRequest,
        error: String,
    },
}
