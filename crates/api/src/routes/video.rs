//! Route definitions for video metadata. Mounted at `/videos`.
//!
//! ```text
//! GET  /    list_videos
//! POST /    create_video
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(video::list_videos).post(video::create_video))
}
