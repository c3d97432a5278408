use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use jobboard_core::Job;
use jobboard_engine::{
    DetailsCache, FavoritesStore, FileKeyValueStore, HttpJobSource, JobListAggregator,
};
use jobboard_logging::{board_debug, board_info};

use crate::cli::{Command, FavCommand};
use crate::config::{self, AppConfig};
use crate::render;

/// Everything a command may need, built once from the configuration.
pub struct Services {
    jobs: JobListAggregator<Arc<HttpJobSource>>,
    details: DetailsCache<Arc<HttpJobSource>>,
    favorites: FavoritesStore<FileKeyValueStore>,
}

impl Services {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let settings = config.api_settings();
        let page_size = settings.page_size;
        let source = Arc::new(
            HttpJobSource::new(settings).context("failed to set up the listing client")?,
        );
        Ok(Self {
            jobs: JobListAggregator::new(source.clone(), page_size),
            details: DetailsCache::new(source),
            favorites: FavoritesStore::new(FileKeyValueStore::new(&config.data_dir)),
        })
    }
}

pub async fn run(command: Command, config: &AppConfig, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Command::InitConfig => {
            config::write_config(config_path, config)?;
            println!("Wrote {}", config_path.display());
            Ok(())
        }
        Command::List { pages } => list_jobs(&Services::new(config)?, pages).await,
        Command::Show { id } => show_job(&Services::new(config)?, &id).await,
        Command::Fav(fav) => run_favorites(&Services::new(config)?, fav).await,
    }
}

async fn list_jobs(services: &Services, pages: u32) -> anyhow::Result<()> {
    let mut view = services
        .jobs
        .load_first_page()
        .await
        .context("failed to load jobs")?;
    for _ in 1..pages.max(1) {
        if !view.has_more {
            break;
        }
        view = services
            .jobs
            .load_next_page()
            .await
            .context("failed to load more jobs")?;
    }

    let favorite_ids = favorite_ids(services).await;
    for job in &view.jobs {
        println!("{}", render::job_row(job, favorite_ids.contains(job.id())));
    }
    println!("{}", render::list_footer(&view));
    Ok(())
}

async fn show_job(services: &Services, id: &str) -> anyhow::Result<()> {
    let Some(job) = services.details.get(id).await? else {
        bail!("job {id} not found");
    };
    let is_favorite = services.favorites.contains(job.id()).await;
    println!("{}", render::job_details(&job, is_favorite));
    Ok(())
}

async fn run_favorites(services: &Services, command: FavCommand) -> anyhow::Result<()> {
    let favorites = &services.favorites;
    match command {
        FavCommand::Add { id } => {
            let job = fetch_job(services, &id).await?;
            favorites.add(&job).await?;
            println!("Added {}", job.work_assignment_name);
        }
        FavCommand::Remove { id } => {
            favorites.remove(&id).await?;
            println!("Removed {id}");
        }
        FavCommand::Toggle { id } => {
            // A saved favorite can be un-toggled without reaching the service.
            let saved = favorites.list().await.into_iter().find(|job| job.has_id(&id));
            let job = match saved {
                Some(job) => job,
                None => fetch_job(services, &id).await?,
            };
            let now_favorite = favorites.toggle(&job).await?;
            println!(
                "{} {}",
                if now_favorite { "Added" } else { "Removed" },
                job.work_assignment_name
            );
        }
        FavCommand::List => {
            let saved = favorites.list().await;
            if saved.is_empty() {
                println!("No favorites yet");
            }
            for job in &saved {
                println!("{}", render::job_row(job, true));
            }
        }
        FavCommand::Clear => {
            favorites.clear().await?;
            board_info!("Favorites cleared from the command line");
            println!("Cleared favorites");
        }
    }
    Ok(())
}

async fn fetch_job(services: &Services, id: &str) -> anyhow::Result<Job> {
    match services.details.get(id).await? {
        Some(job) => Ok(job),
        None => bail!("job {id} not found"),
    }
}

async fn favorite_ids(services: &Services) -> HashSet<String> {
    let ids: HashSet<String> = services
        .favorites
        .list()
        .await
        .into_iter()
        .map(|job| job.work_assignment_id)
        .collect();
    board_debug!("{} favorites loaded for marking", ids.len());
    ids
}
