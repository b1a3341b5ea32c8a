//! Route tree composition.
//!
//! Route hierarchy (all mounted at the root, matching the paths the
//! gallery client and rendering pipeline already use):
//!
//! ```text
//! /                    liveness string
//! /health              JSON health (service + database)
//! /gallery             embedded gallery page
//!
//! /input               POST  submit a topic, render, return output
//! /feedback            POST  attach rating/feedback to a submission
//!
//! /videos              GET   list all video records
//!                      POST  register a rendered video
//! /videos-content/*    GET   raw video bytes (range supported)
//! /check-videos        GET   diagnostic listing of the content roots
//! ```

pub mod content;
pub mod feedback;
pub mod gallery;
pub mod health;
pub mod input;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the full application route tree.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(gallery::router())
        .merge(content::router())
        .nest("/videos", video::router())
        .nest("/input", input::router())
        .nest("/feedback", feedback::router())
}
