//! # Preference Repository
//!
//! Key/value storage for visitor preferences.
//!
//! Known keys: `language`, `colorScheme`, `customColors`. Values are opaque
//! strings here; the gallery app decides what they mean.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for preference key/value pairs.
#[derive(Debug, Clone)]
pub struct PreferenceRepository {
    pool: SqlitePool,
}

impl PreferenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        PreferenceRepository { pool }
    }

    /// The stored value, or `None` if the key was never set.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM preferences WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Inserts or overwrites a value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, "Storing preference");
        upsert_with(&self.pool, key, value).await
    }

    /// Deletes a value. Returns whether anything was removed.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        debug!(key = %key, "Removing preference");
        delete_with(&self.pool, key).await
    }

    /// Writes several keys in one transaction. `Some` stores the value,
    /// `None` deletes the key. Nothing is written if any change fails.
    pub async fn apply(&self, changes: &[(&str, Option<&str>)]) -> DbResult<()> {
        debug!(count = changes.len(), "Applying preference changes");

        let mut tx = self.pool.begin().await?;

        for &(key, value) in changes {
            match value {
                Some(value) => upsert_with(&mut *tx, key, value).await?,
                None => {
                    delete_with(&mut *tx, key).await?;
                }
            }
        }

        tx.commit().await?;
        Ok(())
    }
}

async fn upsert_with<'e, E>(executor: E, key: &str, value: &str) -> DbResult<()>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO preferences (key, value, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(Utc::now())
    .execute(executor)
    .await?;

    Ok(())
}

async fn delete_with<'e, E>(executor: E, key: &str) -> DbResult<bool>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let result = sqlx::query("DELETE FROM preferences WHERE key = ?1")
        .bind(key)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};

    #[tokio::test]
    async fn test_set_get_overwrite_remove() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let prefs = db.preferences();

        assert_eq!(prefs.get("language").await.unwrap(), None);

        prefs.set("language", "nl").await.unwrap();
        assert_eq!(prefs.get("language").await.unwrap().as_deref(), Some("nl"));

        prefs.set("language", "en").await.unwrap();
        assert_eq!(prefs.get("language").await.unwrap().as_deref(), Some("en"));

        assert!(prefs.remove("language").await.unwrap());
        assert!(!prefs.remove("language").await.unwrap());
        assert_eq!(prefs.get("language").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_apply_is_all_or_nothing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let prefs = db.preferences();
        prefs.set("colorScheme", "warm").await.unwrap();
        prefs.set("customColors", "{}").await.unwrap();

        prefs
            .apply(&[("colorScheme", Some("ocean")), ("customColors", None)])
            .await
            .unwrap();
        assert_eq!(prefs.get("colorScheme").await.unwrap().as_deref(), Some("ocean"));
        assert_eq!(prefs.get("customColors").await.unwrap(), None);

        // Empty keys violate the table's CHECK, so the first write rolls back too.
        let result = prefs
            .apply(&[("colorScheme", Some("forest")), ("", Some("x"))])
            .await;
        assert!(matches!(result, Err(DbError::ConstraintViolation(_))));
        assert_eq!(prefs.get("colorScheme").await.unwrap().as_deref(), Some("ocean"));
    }
}
