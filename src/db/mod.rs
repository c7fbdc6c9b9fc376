//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization, schema, and SQLite pragma configuration
//! - First-run seeding of default content
//! - Repository layer for database operations

pub mod migrations;
pub mod repo;
pub mod seed;

pub use migrations::init_db;
pub use repo::Repository;
pub use seed::seed_defaults;
