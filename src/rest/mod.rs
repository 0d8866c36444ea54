// rest/mod.rs — Versioned task-tracking REST API server.
//
// Axum HTTP server; bind address and port come from config (default
// 127.0.0.1:8080). Both versioned namespaces sit behind the shared-secret
// check; /health stays open for probes.
//
// Endpoints:
//   GET    /health
//   GET    /apiv1/tasks/{id}
//   GET    /apiv2/tasks
//   POST   /apiv2/tasks
//   GET    /apiv2/tasks/{id}
//   PATCH  /apiv2/tasks/{id}
//   DELETE /apiv2/tasks/{id}

pub mod auth;
pub mod error;
pub mod routes;

use anyhow::Result;
use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppContext;

pub async fn serve(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let v1 = Router::new()
        .route("/tasks/{id}", get(routes::v1::get_task))
        .route_layer(middleware::from_fn_with_state(
            ctx.clone(),
            auth::require_api_key,
        ));

    let v2 = Router::new()
        .route(
            "/tasks",
            get(routes::v2::list_tasks).post(routes::v2::create_task),
        )
        .route(
            "/tasks/{id}",
            get(routes::v2::get_task)
                .patch(routes::v2::update_task)
                .delete(routes::v2::delete_task),
        )
        .route_layer(middleware::from_fn_with_state(
            ctx.clone(),
            auth::require_api_key,
        ));

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health))
        .nest("/apiv1", v1)
        .nest("/apiv2", v2)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Resolves when a shutdown signal is received.
///
/// On Unix we listen for SIGTERM *and* Ctrl-C.
/// On other platforms we listen for Ctrl-C only.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to register SIGTERM");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.ok();
    }
    info!("shutdown signal received — stopping HTTP server");
}
