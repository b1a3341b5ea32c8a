//! Handler for attaching rating/feedback to a past submission.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use mathmotion_core::error::CoreError;
use mathmotion_core::feedback::validate_rating;
use mathmotion_db::models::input::UpdateFeedback;
use mathmotion_db::repositories::InputRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /feedback
///
/// Attach a 1-5 rating and/or feedback text to an existing submission.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(payload): Json<UpdateFeedback>,
) -> AppResult<impl IntoResponse> {
    if let Some(rating) = payload.rating {
        validate_rating(rating)?;
    }

    let record = InputRepo::set_feedback(
        &state.pool,
        payload.input_id,
        payload.rating,
        payload.feedback.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Input",
        id: payload.input_id,
    }))?;

    tracing::info!(
        input_id = record.id,
        rating = ?record.rating,
        "Feedback recorded",
    );

    Ok(Json(DataResponse::new(record)))
}
