// rest/routes/v1.rs — Version 1 surface: read a single task.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::AppContext;

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
