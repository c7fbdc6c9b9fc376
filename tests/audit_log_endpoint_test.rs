use axum::http::StatusCode;
use content_admin::api;
use content_admin::config::Config;
use content_admin::db::init_db;
use serde_json::{json, Value};
use std::collections::HashMap;
use tempfile::TempDir;
use tower::util::ServiceExt;

async fn setup_test_app(env: &[(&str, &str)]) -> (axum::Router, sqlx::SqlitePool, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path, 1).await.expect("init_db failed");

    let env_map: HashMap<String, String> = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_env_map(env_map).unwrap();

    (
        api::create_router(api::AppState::new(pool.clone(), config)),
        pool,
        temp_dir,
    )
}

async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn logs(app: &axum::Router) -> Vec<Value> {
    let (status, body) = request(app, "GET", "/api/logs", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().clone()
}

#[tokio::test]
async fn test_fresh_store_has_no_entries() {
    let (app, _pool, _temp) = setup_test_app(&[]).await;

    assert!(logs(&app).await.is_empty());
}

#[tokio::test]
async fn test_each_mutation_adds_one_entry() {
    let (app, _pool, _temp) = setup_test_app(&[]).await;

    let (_, created) = request(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Printers"})),
    )
    .await;
    assert_eq!(logs(&app).await.len(), 1);

    request(&app, "PUT", "/api/about", Some(json!({"hero_title": "About"}))).await;
    assert_eq!(logs(&app).await.len(), 2);

    request(&app, "DELETE", &format!("/api/categories/{}", created["id"]), None).await;
    assert_eq!(logs(&app).await.len(), 3);

    // reads never log
    request(&app, "GET", "/api/categories", None).await;
    request(&app, "GET", "/api/about", None).await;
    assert_eq!(logs(&app).await.len(), 3);
}

#[tokio::test]
async fn test_entries_newest_first() {
    let (app, _pool, _temp) = setup_test_app(&[]).await;

    request(&app, "POST", "/api/brands", Some(json!({"name": "Lenovo"}))).await;
    request(&app, "PUT", "/api/settings/show_prices", Some(json!({"value": "false"}))).await;
    request(&app, "DELETE", "/api/subscribers/1", None).await;

    let entries = logs(&app).await;
    let actions: Vec<&str> = entries
        .iter()
        .map(|e| e["action"].as_str().unwrap())
        .collect();
    assert_eq!(
        actions,
        vec!["Subscriber deleted", "Setting updated", "Brand created"]
    );
    assert_eq!(entries[2]["details"], "Brand added: Lenovo");
    assert!(entries[0]["created_at"].is_string());
    assert!(entries[0]["id"].as_i64().unwrap() > entries[2]["id"].as_i64().unwrap());
}

#[tokio::test]
async fn test_missing_key_mutations_still_logged() {
    let (app, _pool, _temp) = setup_test_app(&[]).await;

    request(&app, "DELETE", "/api/products/424242", None).await;

    let entries = logs(&app).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["action"], "Product deleted");
    assert_eq!(entries[0]["details"], "Product with id 424242 deleted");
}

#[tokio::test]
async fn test_failed_mutation_is_not_logged() {
    let (app, _pool, _temp) = setup_test_app(&[]).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Monitorlar"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = request(&app, "POST", "/api/services", Some(json!({"features": 5}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(logs(&app).await.is_empty());
}

#[tokio::test]
async fn test_listing_respects_configured_limit() {
    let (app, _pool, _temp) = setup_test_app(&[("AUDIT_LOG_LIMIT", "3")]).await;

    for i in 0..5 {
        request(&app, "POST", "/api/brands", Some(json!({"name": format!("Brand {}", i)}))).await;
    }

    let entries = logs(&app).await;
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["details"], "Brand added: Brand 4");
    assert_eq!(entries[2]["details"], "Brand added: Brand 2");
}

#[tokio::test]
async fn test_audit_failure_does_not_fail_request() {
    let (app, pool, _temp) = setup_test_app(&[]).await;

    sqlx::query("DROP TABLE logs").execute(&pool).await.unwrap();

    let (status, body) = request(&app, "POST", "/api/brands", Some(json!({"name": "Acer"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_i64());

    let (_, brands) = request(&app, "GET", "/api/brands", None).await;
    assert!(brands
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["name"] == "Acer"));
}
