use jobboard_core::Job;
use jobboard_logging::{board_debug, board_error, board_info, board_warn};

use crate::{KeyValueStore, StorageError};

/// Storage key holding the JSON array of favorite jobs.
pub const FAVORITES_KEY: &str = "@coople_favorites";

/// The user's favorite jobs, persisted as one JSON array under a single key.
///
/// Every operation is a full read-modify-write of that array with no locking,
/// so two concurrent writers can lose an update (last writer wins). Insertion
/// order is preserved and `add` never introduces a second entry for an id.
pub struct FavoritesStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends `job` unless a favorite with the same id exists.
    pub async fn add(&self, job: &Job) -> Result<(), StorageError> {
        let mut favorites = self.read().await.inspect_err(|err| {
            board_error!("Error adding {} to favorites: {}", job.id(), err);
        })?;
        if favorites.iter().any(|favorite| favorite.same_id(job)) {
            board_debug!("Job {} is already a favorite", job.id());
            return Ok(());
        }
        favorites.push(job.clone());
        self.write(&favorites).await.inspect_err(|err| {
            board_error!("Error adding {} to favorites: {}", job.id(), err);
        })?;
        board_info!("Added {} to favorites ({} total)", job.id(), favorites.len());
        Ok(())
    }

    /// Drops every favorite with `id`. Writes back even when nothing matched.
    pub async fn remove(&self, id: &str) -> Result<(), StorageError> {
        let mut favorites = self.read().await.inspect_err(|err| {
            board_error!("Error removing {} from favorites: {}", id, err);
        })?;
        favorites.retain(|favorite| !favorite.has_id(id));
        self.write(&favorites).await.inspect_err(|err| {
            board_error!("Error removing {} from favorites: {}", id, err);
        })?;
        board_info!("Removed {} from favorites ({} left)", id, favorites.len());
        Ok(())
    }

    /// All favorites in insertion order.
    ///
    /// Unreadable or corrupt storage yields an empty list instead of an error.
    pub async fn list(&self) -> Vec<Job> {
        match self.read().await {
            Ok(favorites) => favorites,
            Err(err) => {
                board_warn!("Error getting favorites, showing none: {}", err);
                Vec::new()
            }
        }
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.list()
            .await
            .iter()
            .any(|favorite| favorite.has_id(id))
    }

    /// Removes `job` if it is a favorite, adds it otherwise.
    /// Returns whether the job is a favorite afterwards.
    pub async fn toggle(&self, job: &Job) -> Result<bool, StorageError> {
        let mut favorites = self.read().await.inspect_err(|err| {
            board_error!("Error toggling favorite {}: {}", job.id(), err);
        })?;
        let before = favorites.len();
        favorites.retain(|favorite| !favorite.same_id(job));
        let now_favorite = favorites.len() == before;
        if now_favorite {
            favorites.push(job.clone());
        }
        self.write(&favorites).await.inspect_err(|err| {
            board_error!("Error toggling favorite {}: {}", job.id(), err);
        })?;
        board_info!("Toggled favorite {} -> {}", job.id(), now_favorite);
        Ok(now_favorite)
    }

    /// Deletes the stored collection.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key).await.inspect_err(|err| {
            board_error!("Error clearing favorites: {}", err);
        })?;
        board_info!("Cleared favorites");
        Ok(())
    }

    async fn read(&self) -> Result<Vec<Job>, StorageError> {
        match self.store.get(&self.key).await? {
            Some(text) if !text.trim().is_empty() => Ok(serde_json::from_str(&text)?),
            _ => Ok(Vec::new()),
        }
    }

    async fn write(&self, favorites: &[Job]) -> Result<(), StorageError> {
        let content = serde_json::to_string(favorites)?;
        self.store.set(&self.key, &content).await
    }
}
