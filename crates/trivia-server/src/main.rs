//! Trivia server
//!
//! HTTP API and command-line tools for the trivia question store.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use trivia_core::Config;

mod commands;
mod error;
mod logging;
mod server;

#[derive(Parser)]
#[command(name = "trivia")]
#[command(about = "Trivia - question bank and quiz API")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Address to listen on, overrides the configured bind_addr
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Import questions from a JSON file
    Import {
        /// JSON array of {question, answer, category, difficulty} objects
        file: PathBuf,
    },
    /// Show configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    logging::init(&config);

    match cli.command {
        Some(Commands::Serve { bind }) => {
            let bind_addr = bind.unwrap_or_else(|| config.bind_addr.clone());
            server::serve(&config, &bind_addr).await
        }
        None => server::serve(&config, &config.bind_addr).await,
        Some(Commands::Import { file }) => commands::import::run(&config, &file),
        Some(Commands::Config { command }) => match command {
            Some(ConfigCommands::Show) | None => commands::config::show(&config, cli.config.as_ref()),
        },
    }
}
