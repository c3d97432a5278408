use crate::Job;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobListView {
    pub jobs: Vec<Job>,
    pub total_available: u64,
    pub has_more: bool,
    pub loading: bool,
    /// Index of the last page applied; `None` until the first page arrives.
    pub page_cursor: Option<u32>,
    pub last_error: Option<String>,
}

impl JobListView {
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}
