//! Route definitions for raw video content (root-level paths).

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos-content/{*path}", get(content::serve_content))
        .route("/check-videos", get(content::check_videos))
}
