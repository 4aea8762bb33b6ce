// ABOUTME: Settings save flow
// ABOUTME: Load the stored record, sanitize a submission against it and persist the result

use blogroll_settings::{
    fields, parse_category_id, CategoryIndex, CategoryRef, LegacySettings, Sanitizer,
    SettingsRecord, SettingsSubmission, LINK_CATEGORY,
};
use sqlx::SqlitePool;
use tracing::info;

use crate::categories::CategoryStorage;
use crate::error::{StorageError, StorageResult};
use crate::settings::{LoadedSettings, SettingsStorage};

/// Result of a save: the record before and after the submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub previous: SettingsRecord,
    pub saved: SettingsRecord,
}

impl SaveOutcome {
    pub fn changed_fields(&self) -> Vec<&'static str> {
        self.previous.changed_fields(&self.saved)
    }
}

/// Settings stored under one option name plus the link category namespace
pub struct SettingsService {
    settings: SettingsStorage,
    categories: CategoryStorage,
    key: String,
}

impl SettingsService {
    pub fn new(pool: SqlitePool, key: impl Into<String>) -> Self {
        Self {
            settings: SettingsStorage::new(pool.clone()),
            categories: CategoryStorage::new(pool),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn load(&self) -> StorageResult<LoadedSettings> {
        self.settings.load(&self.key).await
    }

    /// Link categories available as a default
    pub async fn categories(&self) -> StorageResult<Vec<CategoryRef>> {
        self.categories.list_all(LINK_CATEGORY).await
    }

    /// Apply `submission` to the stored record and persist the result.
    ///
    /// Last write wins; nothing guards against a concurrent save.
    pub async fn submit(
        &self,
        submission: &SettingsSubmission,
        password_override: bool,
    ) -> StorageResult<SaveOutcome> {
        let LoadedSettings { record, .. } = self.load().await?;
        let lookup = self.lookup_for(submission).await?;

        let saved = Sanitizer::new(&lookup, password_override).sanitize(record.clone(), submission);
        self.settings.save(&self.key, &saved).await?;

        let outcome = SaveOutcome {
            previous: record,
            saved,
        };
        info!("Settings saved, changed: {:?}", outcome.changed_fields());
        Ok(outcome)
    }

    /// Import an option document exported from an earlier installation.
    ///
    /// The document's settings fields are applied to the stored record as a
    /// submission, so they pass the same checks as a form save. A legacy
    /// `blacklist` is kept beside the result until the next save. Nothing is
    /// written unless the document decodes as a settings record.
    pub async fn import(
        &self,
        document: &serde_json::Value,
        password_override: bool,
    ) -> StorageResult<SaveOutcome> {
        let Some(object) = document.as_object() else {
            return Err(StorageError::Validation(
                "Settings document must be a JSON object".to_string(),
            ));
        };
        let imported: SettingsRecord = serde_json::from_value(document.clone())?;
        let legacy: LegacySettings = serde_json::from_value(document.clone())?;

        let submission = SettingsSubmission::from_record(&imported, |name| object.contains_key(name));
        let LoadedSettings { record, .. } = self.load().await?;
        let lookup = self.lookup_for(&submission).await?;

        let saved = Sanitizer::new(&lookup, password_override).sanitize(record.clone(), &submission);

        let mut stored = serde_json::to_value(&saved)?;
        if let (Some(blacklist), Some(map)) = (legacy.blacklist, stored.as_object_mut()) {
            map.insert(
                fields::LEGACY_BLACKLIST.to_string(),
                serde_json::Value::String(blacklist),
            );
        }
        self.settings.save_raw(&self.key, &stored).await?;

        let outcome = SaveOutcome {
            previous: record,
            saved,
        };
        info!(
            "Imported settings under {}, changed: {:?}",
            self.key,
            outcome.changed_fields()
        );
        Ok(outcome)
    }

    /// Only the submitted category needs resolving, so look up just that one.
    async fn lookup_for(&self, submission: &SettingsSubmission) -> StorageResult<CategoryIndex> {
        let Some(raw) = submission.default_category.as_deref() else {
            return Ok(CategoryIndex::default());
        };

        let id = parse_category_id(raw);
        if id <= 0 {
            return Ok(CategoryIndex::default());
        }

        let found = self.categories.exists(id, LINK_CATEGORY).await?;
        Ok(found.into_iter().collect())
    }
}
