use crate::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the listing source for one page; answer with `Msg::PageLoaded` or `Msg::PageFailed`.
    FetchPage(PageRequest),
}
