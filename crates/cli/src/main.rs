mod cli;
mod commands;
mod config;
mod render;
mod utils;

use clap::Parser;

use crate::cli::Commands;
use crate::commands::{
    handle_config_command, handle_favorites_command, handle_search_command, handle_shell_command,
};
use crate::config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Config { command } => {
            handle_config_command(command).await?;
        }
        command => {
            let config = Config::load().await?;
            run(command, &config).await?;
        }
    }

    Ok(())
}

async fn run(command: Commands, config: &Config) -> eyre::Result<()> {
    match command {
        Commands::Search {
            query,
            page,
            favorite,
            json,
        } => handle_search_command(config, query, page, favorite, json).await,
        Commands::Favorites { command } => handle_favorites_command(command, config).await,
        Commands::Shell => handle_shell_command(config).await,
        Commands::Config { command } => handle_config_command(command).await,
    }
}
