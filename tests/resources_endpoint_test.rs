use axum::http::StatusCode;
use content_admin::api;
use content_admin::config::Config;
use content_admin::db::init_db;
use serde_json::{json, Value};
use std::collections::HashMap;
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    pool: sqlx::SqlitePool,
    _temp: TempDir,
}

async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path, 1).await.expect("init_db failed");
    let config = Config::from_env_map(HashMap::new()).unwrap();
    let app = api::create_router(api::AppState::new(pool.clone(), config));

    TestApp {
        app,
        pool,
        _temp: temp_dir,
    }
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
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn find_by_id<'a>(list: &'a Value, id: &Value) -> Option<&'a Value> {
    list.as_array()
        .unwrap()
        .iter()
        .find(|item| &item["id"] == id)
}

#[tokio::test]
async fn test_category_lifecycle_leaves_product_orphaned() {
    let t = setup_test_app().await;

    let (status, created) = request(
        &t.app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Printers"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].clone();
    assert!(id.is_i64());

    let (_, categories) = request(&t.app, "GET", "/api/categories", None).await;
    let category = find_by_id(&categories, &id).expect("category listed");
    assert_eq!(category["name"], "Printers");

    let (status, product) = request(
        &t.app,
        "POST",
        "/api/products",
        Some(json!({"name": "Label Printer", "price": 199.5, "category_id": id, "brand_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let product_id = product["id"].clone();

    let (status, body) = request(&t.app, "DELETE", &format!("/api/categories/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, categories) = request(&t.app, "GET", "/api/categories", None).await;
    assert!(find_by_id(&categories, &id).is_none());

    let (_, products) = request(&t.app, "GET", "/api/products", None).await;
    let product = find_by_id(&products, &product_id).expect("product still listed");
    assert_eq!(product["category_id"], id);
    assert_eq!(product["category_name"], Value::Null);
    assert_eq!(product["brand_name"], "HP");
    assert_eq!(product["price"], 199.5);
}

#[tokio::test]
async fn test_categories_listed_in_insertion_order() {
    let t = setup_test_app().await;

    request(&t.app, "POST", "/api/categories", Some(json!({"name": "Zebra"}))).await;
    request(&t.app, "POST", "/api/categories", Some(json!({"name": "Alpha"}))).await;

    let (_, categories) = request(&t.app, "GET", "/api/categories", None).await;
    let names: Vec<&str> = categories
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.first(), Some(&"Monitorlar"));
    assert_eq!(&names[names.len() - 2..], &["Zebra", "Alpha"]);
}

#[tokio::test]
async fn test_duplicate_category_is_conflict() {
    let t = setup_test_app().await;

    let (status, body) = request(
        &t.app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Monitorlar"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_service_features_round_trip() {
    let t = setup_test_app().await;

    let features = json!(["Payroll", "Annual returns", "Audit support"]);
    let (status, created) = request(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({
            "title": "Bookkeeping",
            "icon": "Calculator",
            "status": "Aktiv",
            "features": features
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, services) = request(&t.app, "GET", "/api/services", None).await;
    assert_eq!(services[0]["id"], created["id"]);
    assert_eq!(services[0]["features"], features);
    assert_eq!(services[0]["status"], "Aktiv");
}

#[tokio::test]
async fn test_service_without_features_lists_empty_array() {
    let t = setup_test_app().await;

    let (_, created) = request(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({"title": "Consulting"})),
    )
    .await;

    let (_, services) = request(&t.app, "GET", "/api/services", None).await;
    let service = find_by_id(&services, &created["id"]).unwrap();
    assert_eq!(service["features"], json!([]));
    assert_eq!(service["status"], "Aktiv");
}

#[tokio::test]
async fn test_service_update_overwrites_every_field() {
    let t = setup_test_app().await;

    let (_, created) = request(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({
            "title": "Customs",
            "subtitle": "Fast clearance",
            "features": ["Declarations"]
        })),
    )
    .await;
    let id = created["id"].clone();

    let (status, body) = request(
        &t.app,
        "PUT",
        &format!("/api/services/{}", id),
        Some(json!({"title": "Customs brokerage", "status": "Gözləmədə"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, services) = request(&t.app, "GET", "/api/services", None).await;
    assert_eq!(services[0]["id"], id);
    let service = &services[0];
    assert_eq!(service["title"], "Customs brokerage");
    assert_eq!(service["subtitle"], Value::Null);
    assert_eq!(service["features"], json!([]));
    assert_eq!(service["status"], "Gözləmədə");
}

#[tokio::test]
async fn test_update_moves_row_to_front() {
    let t = setup_test_app().await;

    let (_, services) = request(&t.app, "GET", "/api/services", None).await;
    let last = services.as_array().unwrap().last().unwrap().clone();

    request(
        &t.app,
        "PUT",
        &format!("/api/services/{}", last["id"]),
        Some(json!({"title": last["title"], "features": last["features"]})),
    )
    .await;

    let (_, services) = request(&t.app, "GET", "/api/services", None).await;
    assert_eq!(services[0]["id"], last["id"]);
    assert_eq!(services[0]["features"], last["features"]);
}

#[tokio::test]
async fn test_update_missing_id_is_silent_success() {
    let t = setup_test_app().await;

    let (status, body) = request(
        &t.app,
        "PUT",
        "/api/blog/99999",
        Some(json!({"title": "Nope", "slug": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts WHERE id = 99999")
        .fetch_one(&t.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let t = setup_test_app().await;

    let (_, created) = request(
        &t.app,
        "POST",
        "/api/blog",
        Some(json!({"title": "VAT changes", "slug": "vat-changes"})),
    )
    .await;
    let uri = format!("/api/blog/{}", created["id"]);

    for _ in 0..2 {
        let (status, body) = request(&t.app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));

        let (_, posts) = request(&t.app, "GET", "/api/blog", None).await;
        assert!(find_by_id(&posts, &created["id"]).is_none());
    }
}

#[tokio::test]
async fn test_blog_newest_first() {
    let t = setup_test_app().await;

    let (_, created) = request(
        &t.app,
        "POST",
        "/api/blog",
        Some(json!({"title": "Latest", "slug": "latest", "content": "Body"})),
    )
    .await;

    let (_, posts) = request(&t.app, "GET", "/api/blog", None).await;
    assert_eq!(posts[0]["id"], created["id"]);
    assert_eq!(posts[0]["slug"], "latest");
    assert!(posts[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_missing_required_field_is_bad_request() {
    let t = setup_test_app().await;

    let (status, body) = request(
        &t.app,
        "POST",
        "/api/blog",
        Some(json!({"subtitle": "No title"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let t = setup_test_app().await;

    let (status, body) = request(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({"title": "X", "features": "not a list"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = request(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({"title": "X", "status": "Archived"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let t = setup_test_app().await;

    let (status, body) = request(&t.app, "DELETE", "/api/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_team_show_linkedin_round_trip() {
    let t = setup_test_app().await;

    let (_, on) = request(
        &t.app,
        "POST",
        "/api/team",
        Some(json!({"name": "Leyla", "position": "Auditor", "show_linkedin": true})),
    )
    .await;
    let (_, off) = request(
        &t.app,
        "POST",
        "/api/team",
        Some(json!({"name": "Rauf", "position": "Lawyer", "show_linkedin": false})),
    )
    .await;

    let (_, team) = request(&t.app, "GET", "/api/team", None).await;
    assert_eq!(find_by_id(&team, &on["id"]).unwrap()["show_linkedin"], json!(true));
    assert_eq!(find_by_id(&team, &off["id"]).unwrap()["show_linkedin"], json!(false));

    request(
        &t.app,
        "PUT",
        &format!("/api/team/{}", on["id"]),
        Some(json!({"name": "Leyla", "show_linkedin": false})),
    )
    .await;
    let (_, team) = request(&t.app, "GET", "/api/team", None).await;
    assert_eq!(find_by_id(&team, &on["id"]).unwrap()["show_linkedin"], json!(false));
}

#[tokio::test]
async fn test_team_listed_by_sequence() {
    let t = setup_test_app().await;

    request(&t.app, "POST", "/api/team", Some(json!({"name": "Newest"}))).await;

    let (_, team) = request(&t.app, "GET", "/api/team", None).await;
    let ids: Vec<i64> = team
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(team.as_array().unwrap().last().unwrap()["name"], "Newest");
}

#[tokio::test]
async fn test_show_prices_setting_stays_a_string() {
    let t = setup_test_app().await;

    let (status, body) = request(
        &t.app,
        "PUT",
        "/api/settings/show_prices",
        Some(json!({"value": "false"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, settings) = request(&t.app, "GET", "/api/settings", None).await;
    let setting = find_by_id(&settings, &json!("show_prices")).unwrap();
    assert_eq!(setting["value"], json!("false"));
}

#[tokio::test]
async fn test_social_link_update_by_text_key() {
    let t = setup_test_app().await;

    let (status, _) = request(
        &t.app,
        "PUT",
        "/api/social/twitter",
        Some(json!({"url": "https://x.com/new_handle", "status": "Aktiv", "name": "ignored"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, social) = request(&t.app, "GET", "/api/social", None).await;
    assert_eq!(social[0]["id"], "facebook");
    let twitter = find_by_id(&social, &json!("twitter")).unwrap();
    assert_eq!(twitter["url"], "https://x.com/new_handle");
    assert_eq!(twitter["status"], "Aktiv");
    assert_eq!(twitter["name"], "X / Twitter");
}

#[tokio::test]
async fn test_clients_create_update_delete() {
    let t = setup_test_app().await;

    let (_, created) = request(
        &t.app,
        "POST",
        "/api/clients",
        Some(json!({"logo": "data:image/png;base64,AAAA", "status": "Deaktiv"})),
    )
    .await;

    let (_, clients) = request(&t.app, "GET", "/api/clients", None).await;
    assert_eq!(clients[0]["id"], created["id"]);
    assert_eq!(clients[0]["logo"], "data:image/png;base64,AAAA");
    assert_eq!(clients[0]["status"], "Deaktiv");

    let (status, _) = request(
        &t.app,
        "PUT",
        &format!("/api/clients/{}", created["id"]),
        Some(json!({"logo": "https://cdn.example.com/logo.png", "status": "Aktiv"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, clients) = request(&t.app, "GET", "/api/clients", None).await;
    assert_eq!(clients[0]["logo"], "https://cdn.example.com/logo.png");

    request(&t.app, "DELETE", &format!("/api/clients/{}", created["id"]), None).await;
    let (_, clients) = request(&t.app, "GET", "/api/clients", None).await;
    assert!(clients.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_subscribers_list_and_delete() {
    let t = setup_test_app().await;

    let (_, subscribers) = request(&t.app, "GET", "/api/subscribers", None).await;
    assert_eq!(subscribers.as_array().unwrap().len(), 3);
    let id = subscribers[0]["id"].clone();

    let (status, _) = request(&t.app, "DELETE", &format!("/api/subscribers/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, subscribers) = request(&t.app, "GET", "/api/subscribers", None).await;
    assert_eq!(subscribers.as_array().unwrap().len(), 2);
    assert!(find_by_id(&subscribers, &id).is_none());
}

#[tokio::test]
async fn test_stats_are_read_only() {
    let t = setup_test_app().await;

    let (_, stats) = request(&t.app, "GET", "/api/stats", None).await;
    assert_eq!(stats[0]["id"], "services");
    assert!(stats[0]["value"].is_i64());

    let (status, _) = request(&t.app, "POST", "/api/stats", Some(json!({"id": "x"}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_pending_status_rejected_outside_services() {
    let t = setup_test_app().await;

    let (status, body) = request(
        &t.app,
        "POST",
        "/api/products",
        Some(json!({"name": "X", "status": "Pending"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = request(
        &t.app,
        "PUT",
        "/api/team/1",
        Some(json!({"name": "Günel Qarabağlı", "status": "Gözləmədə"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let pending: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM products WHERE status = 'Gözləmədə'",
    )
    .fetch_one(&t.pool)
    .await
    .unwrap();
    assert_eq!(pending, 0);

    let (status, _) = request(
        &t.app,
        "POST",
        "/api/services",
        Some(json!({"title": "Drafted", "status": "Pending"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_team_update_without_flag_stores_zero() {
    let t = setup_test_app().await;

    let (status, _) = request(&t.app, "PUT", "/api/team/1", Some(json!({"name": "A"}))).await;
    assert_eq!(status, StatusCode::OK);

    let stored: Option<i64> =
        sqlx::query_scalar("SELECT show_linkedin FROM team_members WHERE id = 1")
            .fetch_one(&t.pool)
            .await
            .unwrap();
    assert_eq!(stored, Some(0));

    let (_, team) = request(&t.app, "GET", "/api/team", None).await;
    assert_eq!(find_by_id(&team, &json!(1)).unwrap()["show_linkedin"], json!(false));
}
