// rest/routes/v2.rs — Version 2 surface: full task CRUD.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::tasks::TaskPatch;
use crate::AppContext;

const EMPTY_TITLE_AND_DESC: &str = "Task title and description cannot be empty";
const EMPTY_TITLE: &str = "Task title cannot be empty";
const EMPTY_DESC: &str = "Task description cannot be empty";

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    let store = ctx.store.read().await;
    match store.find(id) {
        Some(task) => Ok(Json(json!({ "status": "ok", "data": task }))),
        None => Err(ApiError::TaskNotFound),
    }
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let store = ctx.store.read().await;
    if store.is_empty() {
        return Json(json!({ "status": "ok", "data": [], "message": "No tasks available" }));
    }
    Json(json!({ "status": "ok", "data": store.list() }))
}

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    #[serde(rename = "task_title")]
    pub title: String,
    #[serde(rename = "task_desc")]
    pub description: String,
    /// Treated as false when absent or null.
    #[serde(rename = "is_finished", default)]
    pub done: Option<bool>,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.title.trim().is_empty() || body.description.trim().is_empty() {
        return Err(ApiError::Validation(EMPTY_TITLE_AND_DESC));
    }

    let mut store = ctx.store.write().await;
    let task = store.create(body.title, body.description, body.done.unwrap_or(false));
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "ok", "data": task })),
    ))
}

#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(rename = "task_title")]
    pub title: Option<String>,
    #[serde(rename = "task_desc")]
    pub description: Option<String>,
    #[serde(rename = "is_finished")]
    pub done: Option<bool>,
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = ctx.store.write().await;
    if store.find(id).is_none() {
        return Err(ApiError::TaskNotFound);
    }

    // Validate the whole patch before touching the record, so a rejected
    // request never leaves a half-applied update behind. Title is checked
    // before description.
    if let Some(title) = &body.title {
        if title.trim().is_empty() {
            return Err(ApiError::Validation(EMPTY_TITLE));
        }
    }
    if let Some(description) = &body.description {
        if description.trim().is_empty() {
            return Err(ApiError::Validation(EMPTY_DESC));
        }
    }

    let patch = TaskPatch {
        title: body.title,
        description: body.description,
        done: body.done,
    };
    match store.update(id, patch) {
        Some(task) => Ok(Json(json!({ "status": "ok", "data": task }))),
        None => Err(ApiError::TaskNotFound),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let mut store = ctx.store.write().await;
    if store.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TaskNotFound)
    }
}
