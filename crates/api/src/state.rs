use std::sync::Arc;

use mathmotion_core::generation::Invoker;

use crate::config::ServerConfig;

/// Everything a handler needs, passed via axum's `State` extractor.
///
/// Cloning is cheap: the pool is internally reference-counted and the rest
/// sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: mathmotion_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// One invoker for the whole process, so its concurrency cap actually
    /// spans all in-flight submissions.
    pub invoker: Arc<Invoker>,
}
