// ABOUTME: Storage operations for the settings record
// ABOUTME: Loads and saves named options holding the record as JSON

use blogroll_settings::{LegacySettings, SettingsRecord};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::error::StorageResult;

/// A stored record plus whatever legacy fields came with it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedSettings {
    pub record: SettingsRecord,
    pub legacy: LegacySettings,
}

pub struct SettingsStorage {
    pool: SqlitePool,
}

impl SettingsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load the record stored under `key`.
    ///
    /// A missing option yields the default record; missing keys inside a
    /// stored option take their defaults.
    pub async fn load(&self, key: &str) -> StorageResult<LoadedSettings> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM options WHERE name = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(value) = value else {
            debug!("No stored settings under {}, using defaults", key);
            return Ok(LoadedSettings::default());
        };

        let record: SettingsRecord = serde_json::from_str(&value)?;
        let legacy: LegacySettings = serde_json::from_str(&value)?;

        if legacy.blacklist.is_some() {
            warn!("Settings under {} still carry the legacy blacklist field", key);
        }

        Ok(LoadedSettings { record, legacy })
    }

    /// Store `record` under `key`, replacing whatever was there.
    ///
    /// Only canonical fields are written, so legacy fields are dropped.
    pub async fn save(&self, key: &str, record: &SettingsRecord) -> StorageResult<()> {
        self.upsert(key, serde_json::to_string(record)?).await?;

        info!("Saved settings under {}", key);
        Ok(())
    }

    /// Write a raw JSON document under `key` without going through the record type.
    ///
    /// Used to import options written by older versions.
    pub async fn save_raw(&self, key: &str, value: &serde_json::Value) -> StorageResult<()> {
        self.upsert(key, value.to_string()).await
    }

    async fn upsert(&self, key: &str, value: String) -> StorageResult<()> {
        sqlx::query(
            r#"
            INSERT INTO options (name, value, updated_at)
            VALUES (?, ?, datetime('now', 'utc'))
            ON CONFLICT(name) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
