pub mod crud;
pub mod health;
pub mod logs;

use crate::audit::AuditLogger;
use crate::config::Config;
use crate::db::Repository;
use crate::resources::{
    AboutUs, BlogPosts, Brands, Categories, CertificateSettings, Certificates, ClientSettings,
    Clients, ContactInfo, CorporateInfo, Products, Services, Settings, Singleton, SocialLinks,
    Stats, Subscribers, TeamMembers, Writable,
};
use axum::routing::{delete, get, put, MethodRouter};
use axum::Router;
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub audit: AuditLogger,
    pub config: Config,
}

impl AppState {
    /// Build the request context around one store handle.
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            repo: Arc::new(Repository::new(pool.clone())),
            audit: AuditLogger::new(pool),
            config,
        }
    }
}

/// `GET` list + `POST` create.
fn collection<R: Writable>() -> MethodRouter<AppState> {
    get(crud::list::<R>).post(crud::create::<R>)
}

/// `PUT` update + `DELETE` by key.
fn member<R: Writable>() -> MethodRouter<AppState> {
    put(crud::update::<R>).delete(crud::delete::<R>)
}

/// `GET` + `PUT` on the fixed row.
fn singleton<R: Singleton>() -> MethodRouter<AppState> {
    get(crud::get_singleton::<R>).put(crud::update_singleton::<R>)
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/logs", get(logs::get_logs))
        .route("/api/stats", get(crud::list::<Stats>))
        .route("/api/services", collection::<Services>())
        .route("/api/services/:id", member::<Services>())
        .route("/api/products", collection::<Products>())
        .route("/api/products/:id", member::<Products>())
        .route("/api/categories", collection::<Categories>())
        .route("/api/categories/:id", delete(crud::delete::<Categories>))
        .route("/api/brands", collection::<Brands>())
        .route("/api/brands/:id", delete(crud::delete::<Brands>))
        .route("/api/blog", collection::<BlogPosts>())
        .route("/api/blog/:id", member::<BlogPosts>())
        .route("/api/team", collection::<TeamMembers>())
        .route("/api/team/:id", member::<TeamMembers>())
        .route("/api/certificates", collection::<Certificates>())
        .route(
            "/api/certificates/settings",
            singleton::<CertificateSettings>(),
        )
        .route("/api/certificates/:id", member::<Certificates>())
        .route("/api/clients", collection::<Clients>())
        .route("/api/clients/settings", singleton::<ClientSettings>())
        .route("/api/clients/:id", member::<Clients>())
        .route("/api/social", get(crud::list::<SocialLinks>))
        .route("/api/social/:id", put(crud::update::<SocialLinks>))
        .route("/api/settings", get(crud::list::<Settings>))
        .route("/api/settings/:id", put(crud::update::<Settings>))
        .route("/api/subscribers", get(crud::list::<Subscribers>))
        .route("/api/subscribers/:id", delete(crud::delete::<Subscribers>))
        .route("/api/about", singleton::<AboutUs>())
        .route("/api/corporate", singleton::<CorporateInfo>())
        .route("/api/contact", singleton::<ContactInfo>())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
