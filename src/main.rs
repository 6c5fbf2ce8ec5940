//! hotbar - pinned-item hotbars from the command line
//!
//! Loads the saved hotbar set, applies one action, and saves it back when
//! the action changed anything.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::Command;
use config::HotbarConfig;
use hotbar_store::JsonFileStore;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage pinned-item hotbars", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Hotbar store file; overrides `store_path` from the config
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (mut config, config_warning) = HotbarConfig::load_from_path(&cli.config);

    // RUST_LOG wins over the configured filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();
    config::report(config_warning);

    if let Some(store) = cli.store {
        config.store_path = store;
    }

    if cli.command == Command::InitConfig {
        config.save_to_path(&cli.config)?;
        info!(path = %cli.config.display(), "wrote configuration");
        return Ok(());
    }

    let store = JsonFileStore::new(&config.store_path).with_pretty(config.pretty);
    let mut manager = store.load_manager();

    let mut stdout = std::io::stdout().lock();
    commands::apply(&cli.command, &mut manager, &mut stdout)?;

    if store.persist_if_dirty(&mut manager)? {
        info!(path = %store.path().display(), "saved hotbar store");
    }
    Ok(())
}
