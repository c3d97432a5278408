use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use jobboard_core::Job;
use jobboard_logging::board_debug;
use tokio::time::Instant;

use crate::{FetchError, JobSource};

/// How long a fetched job counts as fresh.
pub const DEFAULT_DETAILS_TTL: Duration = Duration::from_secs(5 * 60);

struct CachedJob {
    job: Job,
    fetched_at: Instant,
}

/// Job details keyed by id, refetched once older than `ttl`.
/// Not-found answers and errors are never cached.
pub struct DetailsCache<S> {
    source: S,
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedJob>>,
}

impl<S: JobSource> DetailsCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, DEFAULT_DETAILS_TTL)
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Job>, FetchError> {
        if let Some(job) = self.cached(id) {
            board_debug!("Details for {} served from cache", id);
            return Ok(Some(job));
        }

        let fetched = self.source.fetch_details(id).await?;
        if let Some(job) = &fetched {
            let mut entries = self.lock_entries();
            let ttl = self.ttl;
            entries.retain(|_, entry| entry.fetched_at.elapsed() < ttl);
            entries.insert(
                id.to_string(),
                CachedJob {
                    job: job.clone(),
                    fetched_at: Instant::now(),
                },
            );
        }
        Ok(fetched)
    }

    /// Warms the cache for `id`.
    pub async fn prefetch(&self, id: &str) -> Result<(), FetchError> {
        self.get(id).await.map(|_| ())
    }

    /// The cached job if it is still fresh. An expired entry is evicted.
    pub fn cached(&self, id: &str) -> Option<Job> {
        let mut entries = self.lock_entries();
        let entry = entries.get(id)?;
        if entry.fetched_at.elapsed() < self.ttl {
            return Some(entry.job.clone());
        }
        entries.remove(id);
        None
    }

    /// Number of entries held, fresh or not yet evicted.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    pub fn invalidate(&self, id: &str) {
        self.lock_entries().remove(id);
    }

    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, CachedJob>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
