use std::collections::HashSet;

use crate::view_model::JobListView;
use crate::{Job, JobPage, PageRequest, DEFAULT_PAGE_SIZE};

/// Accumulated pages of one browsing session.
///
/// Mutation goes through [`crate::update`]; the accessors here are read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct JobListState {
    page_size: u32,
    jobs: Vec<Job>,
    seen: HashSet<String>,
    /// Items returned by the source, duplicates included.
    received: u64,
    total_available: u64,
    has_more: bool,
    page_cursor: Option<u32>,
    in_flight: Option<PageRequest>,
    generation: u64,
    last_error: Option<String>,
}

impl Default for JobListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl JobListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            jobs: Vec::new(),
            seen: HashSet::new(),
            received: 0,
            total_available: 0,
            has_more: false,
            page_cursor: None,
            in_flight: None,
            generation: 0,
            last_error: None,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn view(&self) -> JobListView {
        JobListView {
            jobs: self.jobs.clone(),
            total_available: self.total_available,
            has_more: self.has_more,
            loading: self.is_loading(),
            page_cursor: self.page_cursor,
            last_error: self.last_error.clone(),
        }
    }

    pub(crate) fn begin_refresh(&mut self) -> PageRequest {
        self.generation += 1;
        let request = PageRequest {
            page_num: 0,
            page_size: self.page_size,
            generation: self.generation,
        };
        self.in_flight = Some(request);
        request
    }

    pub(crate) fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || !self.has_more {
            return None;
        }
        let cursor = self.page_cursor?;
        let request = PageRequest {
            page_num: cursor + 1,
            page_size: self.page_size,
            generation: self.generation,
        };
        self.in_flight = Some(request);
        Some(request)
    }

    /// Applies a page if it answers the request currently in flight.
    /// Returns `false` for stale answers, which leave the state untouched.
    pub(crate) fn apply_page(&mut self, request: PageRequest, page: JobPage) -> bool {
        if self.in_flight != Some(request) {
            return false;
        }
        self.in_flight = None;
        self.last_error = None;

        if request.page_num == 0 {
            self.jobs.clear();
            self.seen.clear();
            self.received = 0;
        }

        let page_len = page.items.len();
        self.received += page_len as u64;
        for job in page.items {
            if self.seen.insert(job.work_assignment_id.clone()) {
                self.jobs.push(job);
            }
        }

        self.total_available = page.total;
        // An empty page ends pagination even if the declared total disagrees.
        self.has_more = page_len > 0 && self.received < self.total_available;
        self.page_cursor = Some(request.page_num);
        true
    }

    pub(crate) fn apply_failure(&mut self, request: PageRequest, error: String) -> bool {
        if self.in_flight != Some(request) {
            return false;
        }
        self.in_flight = None;
        self.last_error = Some(error);
        true
    }

    pub(crate) fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new(self.page_size);
        self.generation = generation;
    }
}
