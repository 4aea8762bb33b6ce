// ABOUTME: Settings submission sanitizer
// ABOUTME: Applies per-field validation, normalization and override policy to produce a canonical record

use tracing::debug;

use crate::category::CategoryLookup;
use crate::types::{SettingsRecord, SettingsSubmission};
use crate::validation::{normalize_denylist, parse_category_id, validate_url};

/// Turns raw submissions into canonical records.
///
/// Holds the two inputs that come from outside the submission: the category
/// namespace and whether the password is supplied by the environment.
pub struct Sanitizer<'a, C: CategoryLookup + ?Sized> {
    categories: &'a C,
    password_override: bool,
}

impl<'a, C: CategoryLookup + ?Sized> Sanitizer<'a, C> {
    pub fn new(categories: &'a C, password_override: bool) -> Self {
        Self {
            categories,
            password_override,
        }
    }

    /// Produce the record to store after `submitted` is applied to `previous`.
    ///
    /// Never fails: every invalid value falls back to the previous value,
    /// `false` or `None` depending on the field.
    pub fn sanitize(
        &self,
        previous: SettingsRecord,
        submitted: &SettingsSubmission,
    ) -> SettingsRecord {
        SettingsRecord {
            url: sanitize_url(previous.url, submitted.url.as_deref()),
            username: submitted.username.clone().unwrap_or(previous.username),
            password: sanitize_password(submitted.password.as_deref(), self.password_override),
            denylist: submitted
                .denylist
                .as_deref()
                .map(normalize_denylist)
                .unwrap_or(previous.denylist),
            categories_enabled: submitted.categories_enabled.as_deref() == Some("1"),
            default_category: match submitted.default_category.as_deref() {
                Some(raw) => resolve_category(raw, self.categories),
                None => previous.default_category,
            },
        }
    }
}

/// Convenience wrapper around [`Sanitizer::sanitize`].
pub fn sanitize<C: CategoryLookup + ?Sized>(
    previous: SettingsRecord,
    submitted: &SettingsSubmission,
    categories: &C,
    password_override: bool,
) -> SettingsRecord {
    Sanitizer::new(categories, password_override).sanitize(previous, submitted)
}

fn sanitize_url(previous: String, submitted: Option<&str>) -> String {
    match submitted {
        None => previous,
        Some("") => String::new(),
        Some(raw) => match validate_url(raw) {
            Ok(normalized) => normalized,
            Err(e) => {
                // Keep a good value rather than clobbering it with a bad one
                debug!("Ignoring submitted URL {:?}: {}", raw, e);
                previous
            }
        },
    }
}

// An absent password clears the stored one, unlike every other text field.
fn sanitize_password(submitted: Option<&str>, password_override: bool) -> String {
    if password_override {
        return String::new();
    }

    submitted.map(str::to_string).unwrap_or_default()
}

fn resolve_category<C: CategoryLookup + ?Sized>(raw: &str, categories: &C) -> Option<i64> {
    let id = parse_category_id(raw);
    if id <= 0 {
        return None;
    }

    match categories.find(id) {
        Some(category) => Some(category.id),
        None => {
            debug!("Default category {} does not exist, clearing", id);
            None
        }
    }
}
