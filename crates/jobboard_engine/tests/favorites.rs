use std::sync::{Arc, Once};

use jobboard_core::{Job, JobLocation, Money};
use jobboard_engine::{
    FavoritesStore, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError,
    FAVORITES_KEY,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobboard_logging::initialize_for_tests);
}

fn job(id: &str) -> Job {
    Job {
        work_assignment_id: id.to_string(),
        wa_readable_id: format!("WA-{id}"),
        work_assignment_name: format!("Job {id}"),
        hourly_wage: Money {
            amount: 31.25,
            currency_id: Some(1),
        },
        salary: Money {
            amount: 4200.0,
            currency_id: Some(1),
        },
        job_location: JobLocation {
            address_street: Some("Limmatquai 2".to_string()),
            extra_address: None,
            city: "Zürich".to_string(),
            zip: "8001".to_string(),
            state: Some("ZH".to_string()),
            country_id: Some(41),
        },
        period_from: 1_717_200_000_000,
        date_published: 1_716_800_000_000,
        branch_link: Some("https://example.com/jobs/1".to_string()),
    }
}

fn ids(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(Job::id).collect()
}

fn memory_favorites() -> FavoritesStore<Arc<MemoryKeyValueStore>> {
    init_logging();
    FavoritesStore::new(Arc::new(MemoryKeyValueStore::new()))
}

#[tokio::test]
async fn add_then_contains() {
    let favorites = memory_favorites();
    assert!(!favorites.contains("a").await);

    favorites.add(&job("a")).await.unwrap();
    assert!(favorites.contains("a").await);
    assert!(!favorites.contains("b").await);
}

#[tokio::test]
async fn adding_twice_keeps_one_entry() {
    let favorites = memory_favorites();
    favorites.add(&job("a")).await.unwrap();

    let mut renamed = job("a");
    renamed.work_assignment_name = "Renamed".to_string();
    favorites.add(&renamed).await.unwrap();

    let listed = favorites.list().await;
    assert_eq!(ids(&listed), vec!["a"]);
    assert_eq!(listed[0].work_assignment_name, "Job a");
}

#[tokio::test]
async fn removing_unknown_id_leaves_collection_unchanged() {
    let favorites = memory_favorites();
    favorites.add(&job("a")).await.unwrap();
    favorites.add(&job("b")).await.unwrap();

    favorites.remove("zzz").await.unwrap();
    assert_eq!(ids(&favorites.list().await), vec!["a", "b"]);
}

#[tokio::test]
async fn remove_on_empty_store_writes_empty_array() {
    let favorites = memory_favorites();
    favorites.remove("a").await.unwrap();
    assert_eq!(
        favorites.store().get(FAVORITES_KEY).await.unwrap().as_deref(),
        Some("[]")
    );
    assert!(favorites.list().await.is_empty());
}

#[tokio::test]
async fn add_add_remove_keeps_insertion_order() {
    let favorites = memory_favorites();
    favorites.add(&job("A")).await.unwrap();
    favorites.add(&job("B")).await.unwrap();
    favorites.remove("A").await.unwrap();

    assert_eq!(favorites.list().await, vec![job("B")]);
}

#[tokio::test]
async fn clear_then_list_is_empty() {
    let favorites = memory_favorites();
    favorites.add(&job("a")).await.unwrap();
    favorites.add(&job("b")).await.unwrap();

    favorites.clear().await.unwrap();
    assert!(favorites.list().await.is_empty());
    assert_eq!(favorites.store().get(FAVORITES_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn toggle_flips_membership() {
    let favorites = memory_favorites();
    assert!(favorites.toggle(&job("a")).await.unwrap());
    assert!(favorites.contains("a").await);
    assert!(!favorites.toggle(&job("a")).await.unwrap());
    assert!(!favorites.contains("a").await);
}

#[tokio::test]
async fn favorites_survive_a_restart() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("storage");

    let favorites = FavoritesStore::new(FileKeyValueStore::new(&dir));
    favorites.add(&job("a")).await.unwrap();
    drop(favorites);

    let reopened = FavoritesStore::new(FileKeyValueStore::new(&dir));
    assert_eq!(reopened.list().await, vec![job("a")]);
}

#[tokio::test]
async fn corrupt_storage_lists_as_empty_but_blocks_writes() {
    let favorites = memory_favorites();
    favorites
        .store()
        .set(FAVORITES_KEY, "{not json")
        .await
        .unwrap();

    assert!(favorites.list().await.is_empty());
    assert!(!favorites.contains("a").await);

    let err = favorites.add(&job("a")).await.unwrap_err();
    assert!(matches!(err, StorageError::Serialize(_)));
    // The corrupt value is left for inspection rather than overwritten.
    assert_eq!(
        favorites.store().get(FAVORITES_KEY).await.unwrap().as_deref(),
        Some("{not json")
    );
}

#[tokio::test]
async fn storage_failures_propagate_from_writes() {
    let favorites = memory_favorites();
    favorites.add(&job("a")).await.unwrap();

    favorites.store().set_fail_writes(true);
    assert!(matches!(
        favorites.add(&job("b")).await,
        Err(StorageError::Unavailable(_))
    ));
    assert!(favorites.remove("a").await.is_err());
    assert!(favorites.clear().await.is_err());
    assert!(favorites.toggle(&job("a")).await.is_err());
    assert_eq!(ids(&favorites.list().await), vec!["a"]);

    favorites.store().set_fail_writes(false);
    favorites.store().set_fail_reads(true);
    assert!(favorites.add(&job("b")).await.is_err());
    assert!(favorites.list().await.is_empty());
}

#[tokio::test]
async fn custom_key_is_isolated_from_default_key() {
    init_logging();
    let store = Arc::new(MemoryKeyValueStore::new());
    let default = FavoritesStore::new(store.clone());
    let other = FavoritesStore::with_key(store, "other_favorites");

    default.add(&job("a")).await.unwrap();
    assert!(other.list().await.is_empty());
}
