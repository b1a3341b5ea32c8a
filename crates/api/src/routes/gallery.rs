use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// The gallery client, embedded at build time so the server binary is
/// self-contained.
const GALLERY_HTML: &str = include_str!("../../static/gallery.html");

/// GET /gallery -- the video gallery page.
async fn gallery() -> Html<&'static str> {
    Html(GALLERY_HTML)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/gallery", get(gallery))
}
