//! Repository layer for database operations.
//!
//! All content tables go through the same five statements, parameterized by a
//! resource descriptor (`crate::resources`). Table and column names come from
//! `'static` descriptor constants; every value is bound.

use crate::domain::timestamp_now;
use crate::resources::{Field, Resource, SqlValue};
use sqlx::sqlite::SqlitePool;
use sqlx::{QueryBuilder, Sqlite};

/// Repository for database operations.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// List every row of a resource in its configured order.
    ///
    /// # Errors
    /// Returns an error if the query or row mapping fails.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R::Record>, sqlx::Error> {
        let sql = R::list_sql();
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(R::from_row).collect()
    }

    /// Fetch one row by key.
    ///
    /// # Errors
    /// Returns an error if the query or row mapping fails.
    pub async fn get<R: Resource>(&self, key: &R::Key) -> Result<Option<R::Record>, sqlx::Error> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", R::TABLE);
        let row = sqlx::query(&sql)
            .bind(key.clone())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(R::from_row).transpose()
    }

    /// Insert a row from the present fields, returning the new rowid.
    ///
    /// Fields without a value are left out of the statement so the column
    /// default applies. `updated_at` is always stamped.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including constraint violations.
    pub async fn insert<R: Resource>(&self, fields: Vec<Field>) -> Result<i64, sqlx::Error> {
        let present: Vec<(&'static str, SqlValue)> = fields
            .into_iter()
            .filter_map(|f| f.value.map(|v| (f.column, v)))
            .collect();

        let mut builder = QueryBuilder::<Sqlite>::new(format!("INSERT INTO {} (", R::TABLE));
        let mut columns = builder.separated(", ");
        for (column, _) in &present {
            columns.push(*column);
        }
        columns.push("updated_at");

        builder.push(") VALUES (");
        let mut values = builder.separated(", ");
        for (_, value) in present {
            values.push_bind(value);
        }
        values.push_bind(timestamp_now());
        builder.push(")");

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every field of the row with the given key and refresh `updated_at`.
    ///
    /// Returns the number of rows affected; a missing key affects zero rows
    /// and is not an error.
    ///
    /// # Errors
    /// Returns an error if the update fails, including constraint violations.
    pub async fn update<R: Resource>(
        &self,
        key: &R::Key,
        fields: Vec<Field>,
    ) -> Result<u64, sqlx::Error> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!("UPDATE {} SET ", R::TABLE));
        let mut assignments = builder.separated(", ");
        for field in fields {
            assignments.push(format!("{} = ", field.column));
            assignments.push_bind_unseparated(field.value);
        }
        assignments.push("updated_at = ");
        assignments.push_bind_unseparated(timestamp_now());

        builder.push(" WHERE id = ");
        builder.push_bind(key.clone());

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Delete the row with the given key. A missing key affects zero rows.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete<R: Resource>(&self, key: &R::Key) -> Result<u64, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE id = ?", R::TABLE);
        let result = sqlx::query(&sql)
            .bind(key.clone())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Count the rows of a resource.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count<R: Resource>(&self) -> Result<i64, sqlx::Error> {
        let sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        sqlx::query_scalar(&sql).fetch_one(&self.pool).await
    }

    /// Round-trip to the store, used by readiness checks.
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
