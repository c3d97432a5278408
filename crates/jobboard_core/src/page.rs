use serde::{Deserialize, Serialize};

use crate::Job;

/// Page size used by the listing screens unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// One bounded batch of jobs plus the declared total of all matching jobs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobPage {
    pub items: Vec<Job>,
    pub total: u64,
}

/// A page fetch issued by the state machine.
///
/// `generation` ties the request to the list it was issued for; results for
/// an older generation are dropped on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page_num: u32,
    pub page_size: u32,
    pub generation: u64,
}
