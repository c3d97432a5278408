use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "jobboard", version, about = "Browse public job listings and keep favorites")]
pub struct Cli {
    /// Path to the RON configuration file.
    #[arg(long, global = true, env = "JOBBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listing service base URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the number of jobs per page.
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Log debug output to the terminal.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List jobs, newest pages first.
    List {
        /// Number of pages to load.
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show one job in detail.
    Show { id: String },
    /// Manage favorites.
    #[command(subcommand)]
    Fav(FavCommand),
    /// Write a configuration file with default values.
    InitConfig,
}

#[derive(Debug, Subcommand)]
pub enum FavCommand {
    /// Fetch a job and add it to favorites.
    Add { id: String },
    /// Remove a job from favorites.
    Remove { id: String },
    /// Add or remove a job depending on its current state.
    Toggle { id: String },
    /// List favorite jobs.
    List,
    /// Remove all favorites.
    Clear,
}
