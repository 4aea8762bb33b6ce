use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;

mod cli;

use blogroll_cli::form::SaveArgs;
use blogroll_cli::logging::init_tracing;
use blogroll_config::Config;
use cli::categories::CategoriesCommands;

#[derive(Parser)]
#[command(name = "blogroll")]
#[command(about = "OPML Blogroll - manage feed reader sync settings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current settings
    Show {
        /// Print the settings view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save settings, as submitting the settings form would
    Save(SaveArgs),
    /// Import a settings document exported from an earlier installation
    Import {
        /// JSON file holding the settings object
        file: PathBuf,
    },
    /// Manage link categories
    #[command(subcommand)]
    Categories(CategoriesCommands),
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    match command {
        Commands::Show { json } => cli::settings::show(&config, json).await,
        Commands::Save(args) => cli::settings::save(&config, args).await,
        Commands::Import { file } => cli::settings::import(&config, &file).await,
        Commands::Categories(command) => {
            cli::categories::handle_categories_command(&config, command).await
        }
    }
}
