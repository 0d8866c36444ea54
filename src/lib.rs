pub mod config;
pub mod rest;
pub mod tasks;

use std::sync::Arc;

use config::Config;
use tasks::SharedTaskStore;

/// Shared application state passed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub store: SharedTaskStore,
    pub started_at: std::time::Instant,
}
