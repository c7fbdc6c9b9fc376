//! Generic handlers shared by every resource route.
//!
//! Each handler performs one repository call and, for mutations, appends one
//! audit entry. Update and delete against a missing key succeed without
//! touching anything.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};

use super::AppState;
use crate::error::AppError;
use crate::resources::{Resource, Singleton, Writable, SINGLETON_ID};

#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    fn ok() -> Json<Self> {
        Json(Success { success: true })
    }
}

pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Record>>, AppError> {
    let records = state.repo.list::<R>().await?;
    Ok(Json(records))
}

pub async fn create<R: Writable>(
    State(state): State<AppState>,
    payload: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<Created>, AppError> {
    let Json(input) = payload?;

    let id = state.repo.insert::<R>(R::fields(&input)?).await?;
    info!(resource = R::TABLE, id, "Created row");

    state
        .audit
        .record(&format!("{} created", R::NOUN), &R::created_details(&input))
        .await;

    Ok(Json(Created { id }))
}

pub async fn update<R: Writable>(
    State(state): State<AppState>,
    key: Result<Path<R::Key>, PathRejection>,
    payload: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<Success>, AppError> {
    let Path(key) = key?;
    let Json(input) = payload?;

    let affected = state.repo.update::<R>(&key, R::fields(&input)?).await?;
    if affected == 0 {
        debug!(resource = R::TABLE, key = %key, "Update matched no rows");
    } else {
        info!(resource = R::TABLE, key = %key, "Updated row");
    }

    state
        .audit
        .record(
            &format!("{} updated", R::NOUN),
            &R::updated_details(&key, &input),
        )
        .await;

    Ok(Success::ok())
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    key: Result<Path<R::Key>, PathRejection>,
) -> Result<Json<Success>, AppError> {
    let Path(key) = key?;

    let affected = state.repo.delete::<R>(&key).await?;
    if affected == 0 {
        debug!(resource = R::TABLE, key = %key, "Delete matched no rows");
    } else {
        info!(resource = R::TABLE, key = %key, "Deleted row");
    }

    state
        .audit
        .record(&format!("{} deleted", R::NOUN), &R::deleted_details(&key))
        .await;

    Ok(Success::ok())
}

pub async fn get_singleton<R: Singleton>(
    State(state): State<AppState>,
) -> Result<Json<R::Record>, AppError> {
    state
        .repo
        .get::<R>(&SINGLETON_ID)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("{} has not been initialized", R::NOUN)))
}

/// Overwrite the singleton row. Never inserts: if seeding never ran the
/// update affects nothing.
pub async fn update_singleton<R: Singleton>(
    State(state): State<AppState>,
    payload: Result<Json<R::Input>, JsonRejection>,
) -> Result<Json<Success>, AppError> {
    let Json(input) = payload?;

    let affected = state
        .repo
        .update::<R>(&SINGLETON_ID, R::fields(&input)?)
        .await?;
    info!(resource = R::TABLE, affected, "Updated singleton");

    state
        .audit
        .record(
            &format!("{} updated", R::NOUN),
            &format!("{} details changed", R::NOUN),
        )
        .await;

    Ok(Success::ok())
}
