//! Repository for the `videos` table.

use mathmotion_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, VideoRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, video_path, description, duration_secs, input_id, created_at, updated_at";

/// CRUD operations for rendered video metadata.
pub struct VideoRepo;

impl VideoRepo {
    /// Register a rendered video.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<VideoRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (name, video_path, description, duration_secs, input_id)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoRecord>(&query)
            .bind(&input.name)
            .bind(&input.video_path)
            .bind(&input.description)
            .bind(input.duration_secs)
            .bind(input.input_id)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VideoRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, VideoRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every video record, insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<VideoRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY id");
        sqlx::query_as::<_, VideoRecord>(&query).fetch_all(pool).await
    }
}
