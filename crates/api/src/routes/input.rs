//! Route definitions for the submission pipeline. Mounted at `/input`.

use axum::routing::post;
use axum::Router;

use crate::handlers::input;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(input::submit))
}
