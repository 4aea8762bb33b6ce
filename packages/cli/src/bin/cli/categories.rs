// ABOUTME: CLI commands for link categories
// ABOUTME: Lists and creates categories that can serve as the default

use blogroll_cli::render::categories_table;
use blogroll_config::Config;
use blogroll_settings::{CategoryOption, LINK_CATEGORY};
use blogroll_storage::CategoryStorage;
use clap::Subcommand;
use colored::*;

#[derive(Subcommand)]
pub enum CategoriesCommands {
    /// List link categories
    List,
    /// Add a link category
    Add {
        /// Category name
        name: String,
    },
}

pub async fn handle_categories_command(
    config: &Config,
    command: CategoriesCommands,
) -> anyhow::Result<()> {
    match command {
        CategoriesCommands::List => list_categories(config).await,
        CategoriesCommands::Add { name } => add_category(config, &name).await,
    }
}

async fn list_categories(config: &Config) -> anyhow::Result<()> {
    let service = super::open_service(config).await?;
    let record = service.load().await?.record;
    let categories = service.categories().await?;

    if categories.is_empty() {
        println!("{}", "No link categories found".yellow());
        println!(
            "{}",
            "Use 'blogroll categories add <name>' to create one".dimmed()
        );
        return Ok(());
    }

    let options: Vec<CategoryOption<'_>> = categories
        .iter()
        .map(|category| CategoryOption {
            id: category.id,
            name: &category.name,
            selected: record.default_category == Some(category.id),
        })
        .collect();

    println!("{}", categories_table(&options));
    println!("Total: {} categories", categories.len().to_string().cyan());
    Ok(())
}

async fn add_category(config: &Config, name: &str) -> anyhow::Result<()> {
    let pool = blogroll_storage::open(&config.database_path).await?;
    let category = CategoryStorage::new(pool).create(name, LINK_CATEGORY).await?;

    println!(
        "{} Created category {} (#{})",
        "✓".green(),
        category.name.bold(),
        category.id
    );
    Ok(())
}
