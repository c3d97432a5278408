//! Jobboard engine: listing source, local persistence and the stateful services built on them.
mod aggregator;
mod api;
mod details;
mod favorites;
mod persist;
mod types;

pub use aggregator::JobListAggregator;
pub use api::{ApiSettings, HttpJobSource, JobSource, DEFAULT_BASE_URL};
pub use details::{DetailsCache, DEFAULT_DETAILS_TTL};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use persist::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
pub use types::{FailureKind, FetchError};
