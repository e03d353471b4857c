use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use taskdeck::config::Config;
use taskdeck::logger::Logger;
use taskdeck::storage::LocalStorage;
use taskdeck::ui;

/// A terminal task workspace with reorderable bookmark and todo lists
#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter()?)?;
    log::info!("Starting taskdeck {}", env!("CARGO_PKG_VERSION"));
    if logger.is_enabled() {
        log::info!("Writing logs to {}", Logger::get_log_file_path()?.display());
    }

    let storage = LocalStorage::open(&config.storage.database_url()?)
        .await
        .context("Failed to open the task database")?;

    // Run the TUI application
    ui::run_app(config, Box::new(storage), logger).await?;

    Ok(())
}
