//! Append-only audit log of content mutations.
//!
//! Writes are best effort: a failed append is logged and dropped, never
//! surfaced to the request that triggered it.

use crate::domain::timestamp_now;
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::warn;

/// One audit log row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub id: i64,
    pub action: String,
    pub details: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct AuditLogger {
    pool: SqlitePool,
}

impl AuditLogger {
    pub fn new(pool: SqlitePool) -> Self {
        AuditLogger { pool }
    }

    /// Append an entry stamped with the current time.
    pub async fn record(&self, action: &str, details: &str) {
        if let Err(e) = self.try_record(action, details).await {
            warn!(action, error = %e, "Failed to write audit log entry");
        }
    }

    async fn try_record(&self, action: &str, details: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO logs (action, details, created_at) VALUES (?, ?, ?)")
            .bind(action)
            .bind(details)
            .bind(timestamp_now())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// The newest `limit` entries, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<AuditEntry>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, action, details, created_at
            FROM logs
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<AuditEntry, sqlx::Error> {
                Ok(AuditEntry {
                    id: row.try_get("id")?,
                    action: row.try_get("action")?,
                    details: row.try_get("details")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }
}
