//! Jobboard core: job records and the pure pagination state machine.
mod effect;
mod job;
mod msg;
mod page;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use job::{Job, JobId, JobLocation, Money};
pub use msg::Msg;
pub use page::{JobPage, PageRequest, DEFAULT_PAGE_SIZE};
pub use state::JobListState;
pub use update::update;
pub use view_model::JobListView;
