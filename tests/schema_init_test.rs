use content_admin::db::init_db;
use content_admin::resources::{Categories, Services};
use content_admin::Repository;
use tempfile::TempDir;

async fn count(pool: &sqlx::SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_restart_does_not_duplicate_seed_rows() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("content.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path, 1).await.expect("first init failed");
    let services = count(&pool, "services").await;
    let social = count(&pool, "social_media").await;
    assert!(services > 0);
    pool.close().await;

    let pool = init_db(&db_path, 1).await.expect("second init failed");
    assert_eq!(count(&pool, "services").await, services);
    assert_eq!(count(&pool, "social_media").await, social);
    assert_eq!(count(&pool, "about_us").await, 1);
}

#[tokio::test]
async fn test_restart_keeps_edited_content() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("content.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path, 1).await.unwrap();
    sqlx::query("DELETE FROM categories")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO categories (name) VALUES ('Printers')")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let pool = init_db(&db_path, 1).await.unwrap();
    let repo = Repository::new(pool);
    let categories = repo.list::<Categories>().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Printers");
}

#[tokio::test]
async fn test_emptied_table_is_reseeded_on_restart() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("content.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path, 1).await.unwrap();
    let seeded = count(&pool, "services").await;
    sqlx::query("DELETE FROM services")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let pool = init_db(&db_path, 1).await.unwrap();
    let repo = Repository::new(pool);
    assert_eq!(repo.count::<Services>().await.unwrap(), seeded);
}
