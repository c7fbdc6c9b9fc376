//! Database initialization: connection pool, pragmas, schema, default content.

use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

use super::seed::seed_defaults;

/// Open (creating if needed) the SQLite database, apply the schema, and seed
/// every empty table.
///
/// Safe to call on every startup against an existing file.
///
/// # Errors
/// Returns an error if the file cannot be opened or a schema/seed statement fails.
pub async fn init_db(db_path: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await?;

    run_migrations(&pool).await?;
    seed_defaults(&pool).await?;

    info!("Database initialized successfully at {}", db_path);
    Ok(pool)
}

/// Create any missing tables and indexes.
pub(crate) async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    for statement in schema_statements(include_str!("schema.sql")) {
        sqlx::query(&statement).execute(pool).await?;
    }

    info!("Migrations completed successfully");
    Ok(())
}

/// Split a schema script into statements, dropping `--` comment lines first
/// so punctuation inside a comment never ends a statement.
fn schema_statements(script: &str) -> Vec<String> {
    let code: String = script
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    code.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.get(0);
    info!("SQLite journal_mode set to: {}", journal_mode);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}
