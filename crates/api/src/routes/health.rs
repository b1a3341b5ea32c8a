use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// False when the store stopped answering.
    pub db_healthy: bool,
}

/// GET / -- plain-text liveness probe.
///
/// Kept as a bare string: the dev workflow curls this to check the server
/// is up before anything else is wired.
async fn root() -> &'static str {
    "Server is ready"
}

/// GET /health -- service status plus a live round-trip to the store.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = mathmotion_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
