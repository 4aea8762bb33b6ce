// ABOUTME: Type definitions for blogroll settings
// ABOUTME: Canonical settings record, raw form submission and category references

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

/// Field names as they appear in stored options and form submissions
pub mod fields {
    pub const URL: &str = "url";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const DENYLIST: &str = "denylist";
    pub const CATEGORIES_ENABLED: &str = "categories_enabled";
    pub const DEFAULT_CATEGORY: &str = "default_category";
    /// Former name of `denylist`, read but never written
    pub const LEGACY_BLACKLIST: &str = "blacklist";
}

/// The canonical, validated settings record.
///
/// `Default` is the schema's zero-value record and doubles as the fallback
/// for keys missing from stored data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    /// OPML endpoint; empty means unset
    pub url: String,
    pub username: String,
    pub password: String,
    /// CRLF-separated substrings, trimmed
    pub denylist: String,
    pub categories_enabled: bool,
    #[serde(deserialize_with = "deserialize_category_id")]
    pub default_category: Option<i64>,
}

impl SettingsRecord {
    /// Names of the fields whose values differ between `self` and `other`.
    pub fn changed_fields(&self, other: &SettingsRecord) -> Vec<&'static str> {
        let mut changed = Vec::new();

        if self.url != other.url {
            changed.push(fields::URL);
        }
        if self.username != other.username {
            changed.push(fields::USERNAME);
        }
        if self.password != other.password {
            changed.push(fields::PASSWORD);
        }
        if self.denylist != other.denylist {
            changed.push(fields::DENYLIST);
        }
        if self.categories_enabled != other.categories_enabled {
            changed.push(fields::CATEGORIES_ENABLED);
        }
        if self.default_category != other.default_category {
            changed.push(fields::DEFAULT_CATEGORY);
        }

        changed
    }
}

/// Fields from earlier versions that survive in stored data but are never written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LegacySettings {
    pub blacklist: Option<String>,
}

/// A raw settings submission.
///
/// `None` means the field was absent from the submission, which is distinct
/// from a field submitted as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsSubmission {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub denylist: Option<String>,
    pub categories_enabled: Option<String>,
    pub default_category: Option<String>,
}

impl SettingsSubmission {
    /// Build a submission from decoded form pairs.
    ///
    /// Unknown keys are ignored. When a key repeats, the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut submission = SettingsSubmission::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                fields::URL => &mut submission.url,
                fields::USERNAME => &mut submission.username,
                fields::PASSWORD => &mut submission.password,
                fields::DENYLIST => &mut submission.denylist,
                fields::CATEGORIES_ENABLED => &mut submission.categories_enabled,
                fields::DEFAULT_CATEGORY => &mut submission.default_category,
                other => {
                    debug!("Ignoring unknown settings field: {}", other);
                    continue;
                }
            };
            *slot = Some(value.into());
        }

        submission
    }

    /// The submission carrying `record`'s values, limited to the fields
    /// `present` accepts.
    ///
    /// A disabled flag is left out the way an unchecked checkbox is, and no
    /// default category is submitted as an empty selection.
    pub fn from_record<F>(record: &SettingsRecord, present: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let field = |name: &str, value: String| present(name).then_some(value);

        SettingsSubmission {
            url: field(fields::URL, record.url.clone()),
            username: field(fields::USERNAME, record.username.clone()),
            password: field(fields::PASSWORD, record.password.clone()),
            denylist: field(fields::DENYLIST, record.denylist.clone()),
            categories_enabled: record
                .categories_enabled
                .then(|| "1".to_string())
                .filter(|_| present(fields::CATEGORIES_ENABLED)),
            default_category: field(
                fields::DEFAULT_CATEGORY,
                record
                    .default_category
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == SettingsSubmission::default()
    }
}

/// A category in the link category namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCategoryId {
    Id(i64),
    Text(String),
}

/// Older data stored the category id as a string; accept both.
fn deserialize_category_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Option::<StoredCategoryId>::deserialize(deserializer)?;

    Ok(match stored {
        None => None,
        Some(StoredCategoryId::Id(id)) => Some(id),
        Some(StoredCategoryId::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                match text.parse::<i64>() {
                    Ok(id) => Some(id),
                    Err(_) => {
                        warn!("Discarding malformed stored default category: {:?}", text);
                        None
                    }
                }
            }
        }
    })
}
