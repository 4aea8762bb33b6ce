// ABOUTME: Terminal rendering of the settings form
// ABOUTME: Builds comfy-table tables from the projected settings view

use blogroll_settings::{denylist_entries, normalize_line_endings, CategoryOption, SettingsView};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

const NOT_SET: &str = "(not set)";
const MASK: &str = "********";

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn or_not_set(value: &str) -> String {
    if value.is_empty() {
        NOT_SET.to_string()
    } else {
        value.to_string()
    }
}

/// The password is never printed, only whether one is stored.
pub fn password_cell(view: &SettingsView<'_>) -> String {
    if view.password_disabled {
        "(defined elsewhere)".to_string()
    } else if view.password.is_empty() {
        NOT_SET.to_string()
    } else {
        MASK.to_string()
    }
}

/// One entry per line; a legacy value may still use bare LF line endings.
pub fn denylist_cell(view: &SettingsView<'_>) -> String {
    let normalized = normalize_line_endings(view.denylist);
    let entries: Vec<&str> = denylist_entries(&normalized).collect();
    if entries.is_empty() {
        NOT_SET.to_string()
    } else {
        entries.join("\n")
    }
}

pub fn settings_table(view: &SettingsView<'_>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Setting", "Value"]);

    let default_category = view
        .selected_category()
        .map(|option| format!("{} (#{})", option.name, option.id))
        .unwrap_or_else(|| "(none)".to_string());

    table.add_row(vec!["OPML URL".to_string(), or_not_set(view.url)]);
    table.add_row(vec!["Username".to_string(), or_not_set(view.username)]);
    table.add_row(vec!["Password".to_string(), password_cell(view)]);
    table.add_row(vec!["Denylist".to_string(), denylist_cell(view)]);
    table.add_row(vec!["Default Category".to_string(), default_category]);
    table.add_row(vec![
        "Enable Categories".to_string(),
        if view.categories_enabled {
            "Enabled".to_string()
        } else {
            "Disabled".to_string()
        },
    ]);

    table
}

pub fn categories_table(categories: &[CategoryOption<'_>]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Default"]);

    for option in categories {
        table.add_row(vec![
            option.id.to_string(),
            option.name.to_string(),
            if option.selected { "✓" } else { "" }.to_string(),
        ]);
    }

    table
}
