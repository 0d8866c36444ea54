// rest/routes/health.rs — unauthenticated liveness probe.
//
// Sits outside both versioned namespaces so monitors can poll it without
// the shared secret. Reports process identity only, never task data.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppContext;

pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": ctx.started_at.elapsed().as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
