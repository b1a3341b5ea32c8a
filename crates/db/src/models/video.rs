//! Rendered video entity model and DTOs.

use mathmotion_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: DbId,
    pub name: String,
    /// Filesystem-relative path of the rendered asset as recorded by the
    /// rendering side. Only its final segment is meaningful for playback.
    pub video_path: String,
    pub description: String,
    /// Duration in seconds, when the rendering side reported it.
    #[serde(rename = "duration")]
    pub duration_secs: Option<f64>,
    /// Submission that produced this video, when known.
    pub input_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a rendered video.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateVideo {
    pub name: String,
    pub video_path: String,
    pub description: Option<String>,
    #[serde(rename = "duration")]
    pub duration_secs: Option<f64>,
    pub input_id: Option<DbId>,
}
