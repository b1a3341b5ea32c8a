//! Route definitions for submission feedback. Mounted at `/feedback`.

use axum::routing::post;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(feedback::submit_feedback))
}
