mod cli;
mod commands;
mod config;
mod render;

use std::path::PathBuf;

use clap::Parser;
use jobboard_logging::{board_info, board_warn, LogDestination};
use log::LevelFilter;

use crate::cli::Cli;
use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    // Logging depends on the config, so config problems are reported afterwards.
    let loaded = config::read_config(&config_path);
    let mut config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let destination = if config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    jobboard_logging::initialize(destination, level);

    match loaded {
        Ok(Some(_)) => board_info!("Loaded config from {:?}", config_path),
        Ok(None) => board_info!("No config at {:?}, using defaults", config_path),
        Err(err) => board_warn!("Ignoring config: {}", err),
    }

    commands::run(cli.command, &config, &config_path).await
}
