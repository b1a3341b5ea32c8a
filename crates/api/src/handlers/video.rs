//! Handlers for the `/videos` resource: listing and registration.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mathmotion_core::video_paths::{playback_url, CONTENT_URL_PREFIX};
use mathmotion_db::models::video::{CreateVideo, VideoRecord};
use mathmotion_db::repositories::VideoRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// A video record enriched with its servable URL, so every consumer shares
/// one derivation instead of re-implementing the final-segment convention.
#[derive(Debug, Serialize)]
pub struct VideoListing {
    #[serde(flatten)]
    pub record: VideoRecord,
    #[serde(rename = "playbackUrl")]
    pub playback_url: String,
}

/// GET /videos
///
/// Every video record, store order, no pagination.
pub async fn list_videos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let videos = VideoRepo::list_all(&state.pool).await?;

    let listings: Vec<VideoListing> = videos
        .into_iter()
        .map(|record| {
            let playback_url = playback_url(&record.video_path, CONTENT_URL_PREFIX);
            VideoListing {
                record,
                playback_url,
            }
        })
        .collect();

    Ok(Json(DataResponse::new(listings)))
}

/// POST /videos
///
/// Register metadata for a rendered asset. This is how the rendering side
/// reports a finished video back; the file itself is already on disk under
/// a content root.
pub async fn create_video(
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() || input.video_path.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Fields name and videoPath are required".to_string(),
        ));
    }

    let video = VideoRepo::create(&state.pool, &input).await?;

    tracing::info!(
        video_id = video.id,
        name = %video.name,
        path = %video.video_path,
        "Video registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(video))))
}
