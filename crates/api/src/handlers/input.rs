//! Handler for the `/input` submission pipeline.
//!
//! Validates the submitted topic, persists it, runs the rendering script
//! through the generation invoker, and folds the captured process output
//! into the response. The response is not sent until the process has fully
//! exited; a render that outlives the configured deadline is killed and
//! surfaces as a structured 500.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mathmotion_core::naming;
use mathmotion_db::models::input::CreateInput;
use mathmotion_db::repositories::InputRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::SubmissionResponse;
use crate::state::AppState;

/// Submission payload. Unknown fields are rejected rather than silently
/// carried along.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubmitInput {
    pub name: Option<String>,
}

/// POST /input
///
/// Persist the submission, then run one render process for it and wait for
/// completion. The input record stays persisted even when the render fails;
/// the failure response carries the process's stderr verbatim.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitInput>,
) -> AppResult<impl IntoResponse> {
    let name = payload.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        return Err(AppError::BadRequest("Please fill the input".to_string()));
    }

    let record = InputRepo::create(
        &state.pool,
        &CreateInput {
            input: name.to_string(),
            python_script: state.config.generation.script_path.clone(),
        },
    )
    .await?;

    tracing::info!(input_id = record.id, topic = %record.input, "Submission stored, starting generation");

    let submission = serde_json::json!({ "name": record.input });
    let output = state.invoker.generate(&submission).await?;

    tracing::info!(
        input_id = record.id,
        duration_ms = output.duration_ms,
        "Generation finished",
    );

    // The renderer reports success through its exit code, but the gallery
    // only sees files that land in a content root under the expected name.
    let expected = naming::video_filename(&record.input);
    let mut rendered = false;
    for root in &state.config.video_dirs {
        if tokio::fs::metadata(root.join(&expected)).await.is_ok() {
            rendered = true;
            break;
        }
    }
    if !rendered {
        tracing::warn!(
            input_id = record.id,
            file = %expected,
            "Render exited cleanly but the expected output file is not in any content root",
        );
    }

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            success: true,
            data: record,
            python_output: output.stdout,
        }),
    ))
}
