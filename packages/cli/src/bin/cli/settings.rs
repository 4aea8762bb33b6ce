// ABOUTME: CLI commands for the settings form
// ABOUTME: Show the current values, save edits through the sanitizer and import old documents

use std::fs;
use std::path::Path;

use anyhow::Context;
use blogroll_cli::form::SaveArgs;
use blogroll_cli::render::settings_table;
use blogroll_config::Config;
use blogroll_settings::{fields, parse_category_id, validate_url, SettingsView};
use colored::*;
use tracing::debug;

use super::open_service;

pub async fn show(config: &Config, json: bool) -> anyhow::Result<()> {
    let service = open_service(config).await?;
    let loaded = service.load().await?;
    let categories = service.categories().await?;
    let override_active = config.password_override.is_active();

    let view = SettingsView::project(&loaded.record, &loaded.legacy, &categories, override_active);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", settings_table(&view));

    if override_active {
        println!(
            "{}",
            "Password is supplied by OPML_BLOGROLL_PASS and cannot be edited here".dimmed()
        );
    }
    if loaded.record.denylist.is_empty() && !view.denylist.is_empty() {
        println!(
            "{}",
            "Denylist comes from the legacy 'blacklist' field; save once to migrate it".yellow()
        );
    }

    Ok(())
}

pub async fn save(config: &Config, args: SaveArgs) -> anyhow::Result<()> {
    let service = open_service(config).await?;
    let override_active = config.password_override.is_active();

    if override_active && args.password.is_some() {
        println!(
            "{}",
            "Ignoring --password: OPML_BLOGROLL_PASS supplies the password".yellow()
        );
    }
    if let Some(url) = args.url.as_deref().filter(|url| !url.is_empty()) {
        if let Err(e) = validate_url(url) {
            println!("{} {}; keeping the stored URL", "Warning:".yellow(), e);
        }
    }
    let requested_category = args
        .default_category
        .as_deref()
        .map(parse_category_id)
        .filter(|id| *id > 0);

    let form = {
        let loaded = service.load().await?;
        let categories = service.categories().await?;
        SettingsView::project(&loaded.record, &loaded.legacy, &categories, override_active)
            .to_submission()
    };
    let submission = args
        .into_submission(form)
        .context("reading denylist file")?;
    debug!("Submitting settings form, empty={}", submission.is_empty());

    let outcome = service.submit(&submission, override_active).await?;

    if let Some(id) = requested_category {
        if outcome.saved.default_category != Some(id) {
            println!(
                "{} Link category #{} does not exist; default category cleared",
                "Warning:".yellow(),
                id
            );
        }
    }

    let changed = outcome.changed_fields();
    if changed.is_empty() {
        println!("{} Settings saved, nothing changed", "✓".green());
    } else {
        println!(
            "{} Settings saved, changed: {}",
            "✓".green(),
            changed.join(", ").cyan()
        );
    }

    Ok(())
}

pub async fn import(config: &Config, file: &Path) -> anyhow::Result<()> {
    let contents =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let document: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {} as JSON", file.display()))?;

    let service = open_service(config).await?;
    let outcome = service
        .import(&document, config.password_override.is_active())
        .await?;

    println!(
        "{} Imported settings into option {}, changed: {}",
        "✓".green(),
        service.key().bold(),
        outcome.changed_fields().join(", ").cyan()
    );

    if let Some(url) = document.get(fields::URL).and_then(|url| url.as_str()) {
        if !url.is_empty() && validate_url(url).is_err() {
            println!("{} Imported URL was rejected; keeping the stored URL", "Warning:".yellow());
        }
    }
    if service.load().await?.legacy.blacklist.is_some() {
        println!(
            "{}",
            "Legacy 'blacklist' found; it is shown as the denylist until the next save".dimmed()
        );
    }

    Ok(())
}
