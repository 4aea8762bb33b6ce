// ABOUTME: Read-side projection of the settings record
// ABOUTME: Password masking, legacy denylist fallback and the settings form view

use serde::Serialize;

use crate::types::{CategoryRef, LegacySettings, SettingsRecord, SettingsSubmission};

/// Value to show in the password input.
///
/// Empty while the environment supplies the password, so the stored value
/// never leaks into the form.
pub fn password_display(record: &SettingsRecord, override_active: bool) -> &str {
    if override_active {
        ""
    } else {
        &record.password
    }
}

/// Value to show in the denylist input, falling back to the legacy `blacklist`.
pub fn denylist_display<'a>(record: &'a SettingsRecord, legacy: &'a LegacySettings) -> &'a str {
    if !record.denylist.is_empty() {
        return &record.denylist;
    }

    match legacy.blacklist.as_deref() {
        Some(blacklist) if !blacklist.is_empty() => blacklist,
        _ => "",
    }
}

/// One entry of the default category selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption<'a> {
    pub id: i64,
    pub name: &'a str,
    pub selected: bool,
}

/// Everything the settings form renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView<'a> {
    pub url: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    /// The password input is read-only while the environment supplies it
    pub password_disabled: bool,
    pub denylist: &'a str,
    pub categories_enabled: bool,
    pub categories: Vec<CategoryOption<'a>>,
}

impl<'a> SettingsView<'a> {
    pub fn project(
        record: &'a SettingsRecord,
        legacy: &'a LegacySettings,
        categories: &'a [CategoryRef],
        override_active: bool,
    ) -> Self {
        Self {
            url: &record.url,
            username: &record.username,
            password: password_display(record, override_active),
            password_disabled: override_active,
            denylist: denylist_display(record, legacy),
            categories_enabled: record.categories_enabled,
            categories: categories
                .iter()
                .map(|category| CategoryOption {
                    id: category.id,
                    name: &category.name,
                    selected: record.default_category == Some(category.id),
                })
                .collect(),
        }
    }

    /// Currently selected default category, if it is still listed
    pub fn selected_category(&self) -> Option<&CategoryOption<'a>> {
        self.categories.iter().find(|option| option.selected)
    }

    /// What the form posts back when saved without edits.
    ///
    /// A disabled password input and an unchecked checkbox are not posted;
    /// the category selector always is, empty when nothing is selected.
    pub fn to_submission(&self) -> SettingsSubmission {
        SettingsSubmission {
            url: Some(self.url.to_string()),
            username: Some(self.username.to_string()),
            password: (!self.password_disabled).then(|| self.password.to_string()),
            denylist: Some(self.denylist.to_string()),
            categories_enabled: self.categories_enabled.then(|| "1".to_string()),
            default_category: Some(
                self.selected_category()
                    .map(|option| option.id.to_string())
                    .unwrap_or_default(),
            ),
        }
    }
}
