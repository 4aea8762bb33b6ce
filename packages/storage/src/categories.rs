// ABOUTME: Storage operations for the category namespace
// ABOUTME: Lookup, listing and creation of taxonomy terms such as link categories

use blogroll_settings::CategoryRef;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::{StorageError, StorageResult};

pub struct CategoryStorage {
    pool: SqlitePool,
}

impl CategoryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find the term with `id` in `taxonomy`
    pub async fn exists(&self, id: i64, taxonomy: &str) -> StorageResult<Option<CategoryRef>> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT term_id, name FROM terms WHERE term_id = ? AND taxonomy = ?")
                .bind(id)
                .bind(taxonomy)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, name)| CategoryRef { id, name }))
    }

    /// All terms in `taxonomy`, ordered by name
    pub async fn list_all(&self, taxonomy: &str) -> StorageResult<Vec<CategoryRef>> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            "SELECT term_id, name FROM terms WHERE taxonomy = ? ORDER BY name COLLATE NOCASE, term_id",
        )
        .bind(taxonomy)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| CategoryRef { id, name })
            .collect())
    }

    /// Create a term; names are unique within a taxonomy.
    pub async fn create(&self, name: &str, taxonomy: &str) -> StorageResult<CategoryRef> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageError::Validation(
                "Category name cannot be empty".to_string(),
            ));
        }

        let result = sqlx::query("INSERT INTO terms (name, taxonomy) VALUES (?, ?)")
            .bind(name)
            .bind(taxonomy)
            .execute(&self.pool)
            .await;

        let id = match result {
            Ok(done) => done.last_insert_rowid(),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(StorageError::Duplicate(format!(
                    "category name in {}: {}",
                    taxonomy, name
                )));
            }
            Err(e) => return Err(e.into()),
        };

        info!("Created {} term {} ({})", taxonomy, id, name);
        Ok(CategoryRef {
            id,
            name: name.to_string(),
        })
    }
}
