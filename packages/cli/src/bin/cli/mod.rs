// ABOUTME: Subcommand implementations for the blogroll binary
// ABOUTME: Settings form commands and link category management

pub mod categories;
pub mod settings;

use anyhow::Context;
use blogroll_config::Config;
use blogroll_storage::SettingsService;

/// Open the configured database and the settings stored in it
pub async fn open_service(config: &Config) -> anyhow::Result<SettingsService> {
    let pool = blogroll_storage::open(&config.database_path)
        .await
        .with_context(|| format!("opening {}", config.database_path.display()))?;

    Ok(SettingsService::new(pool, config.settings_key.clone()))
}
