pub mod api;
pub mod audit;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod resources;

pub use audit::{AuditEntry, AuditLogger};
pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{FeatureCard, ServiceStatus, Status};
pub use error::AppError;
