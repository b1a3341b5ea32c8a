//! Submission entity model and DTOs.

use mathmotion_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inputs` table.
///
/// Serialized camelCase to match the wire contract the gallery and the
/// rendering pipeline already speak.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    pub id: DbId,
    /// The user-supplied topic.
    pub input: String,
    /// Path of the rendering script used for this submission.
    pub python_script: String,
    /// Optional 1-5 rating attached after the fact.
    pub rating: Option<i32>,
    pub feedback: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a submission.
#[derive(Debug, Clone)]
pub struct CreateInput {
    pub input: String,
    pub python_script: String,
}

/// DTO for attaching rating/feedback to an existing submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateFeedback {
    pub input_id: DbId,
    pub rating: Option<i32>,
    pub feedback: Option<String>,
}
