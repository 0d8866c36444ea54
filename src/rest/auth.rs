// rest/auth.rs — shared-secret auth middleware.
//
// Clients present the key either way:
//   Header: X-API-Key: <key>
//   Query:  ?api-key=<key>
// A non-empty header wins; otherwise the query parameter is consulted.

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::rest::error::ApiError;
use crate::AppContext;

/// Query-string fallback for the API key (`?api-key=...`).
#[derive(Deserialize)]
struct KeyParams {
    #[serde(rename = "api-key")]
    api_key: Option<String>,
}

pub async fn require_api_key(
    State(ctx): State<Arc<AppContext>>,
    req: Request,
    next: Next,
) -> Response {
    let header_key = req
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let query_key = Query::<KeyParams>::try_from_uri(req.uri())
        .ok()
        .and_then(|Query(params)| params.api_key);

    // An empty header does not count as presenting a key; fall through to
    // the query parameter.
    let presented = header_key.filter(|k| !k.is_empty()).or(query_key);

    match presented {
        Some(key) if key == ctx.config.api_key => next.run(req).await,
        _ => {
            debug!(path = %req.uri().path(), "rejected request with invalid or missing API key");
            ApiError::Forbidden.into_response()
        }
    }
}
