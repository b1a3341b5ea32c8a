use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mathmotion_core::error::CoreError;
use mathmotion_core::generation::GenerationError;
use serde::Serialize;

/// Error type shared by every handler.
///
/// Converting into a response always produces the
/// `{success:false, message, error?}` envelope the gallery and the
/// rendering pipeline already parse, with `error` only present when there
/// is diagnostic text worth forwarding (a render's stderr, a timeout note).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error raised by `mathmotion_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Store failure, classified per variant in [`IntoResponse`].
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The rendering process failed, timed out, or could not start.
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Client sent something unusable; the message goes back as-is.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything that should never surface details to a client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn envelope(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Response {
    let body = ErrorBody {
        success: false,
        message: message.into(),
        error,
    };
    (status, axum::Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => envelope(
                StatusCode::NOT_FOUND,
                format!("No {entity} with id {id}"),
                None,
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                envelope(StatusCode::BAD_REQUEST, msg, None)
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Core error reached a handler");
                envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                    None,
                )
            }

            AppError::Database(err) => sqlx_response(err),

            // The captured stderr goes back verbatim; it is the only
            // diagnostic the submitting user ever sees.
            AppError::Generation(GenerationError::Failed { exit_code, stderr }) => {
                tracing::error!(exit_code, "Render process failed");
                envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Video generation failed",
                    Some(stderr),
                )
            }
            AppError::Generation(GenerationError::Timeout { elapsed_ms }) => envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Video generation timed out",
                Some(format!("Process killed after {elapsed_ms}ms")),
            ),
            AppError::Generation(GenerationError::NotFound(path)) => envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Generation script not found",
                Some(path),
            ),
            AppError::Generation(GenerationError::Io(err)) => {
                tracing::error!(error = %err, "Could not run the render process");
                envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to launch generation process",
                    Some(err.to_string()),
                )
            }

            AppError::BadRequest(msg) => envelope(StatusCode::BAD_REQUEST, msg, None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Unclassified internal error");
                envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                    None,
                )
            }
        }
    }
}

/// Map a sqlx error onto the wire.
///
/// `RowNotFound` is a 404 and a broken foreign key (Postgres 23503) is the
/// client's fault. Everything else is reported as the bare `"Server error"`
/// string the clients already display, with the real cause only in the log.
fn sqlx_response(err: sqlx::Error) -> Response {
    match &err {
        sqlx::Error::RowNotFound => envelope(StatusCode::NOT_FOUND, "Resource not found", None),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => envelope(
            StatusCode::BAD_REQUEST,
            format!(
                "Referenced row does not exist: {}",
                db_err.constraint().unwrap_or("unknown constraint")
            ),
            None,
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            envelope(StatusCode::INTERNAL_SERVER_ERROR, "Server error", None)
        }
    }
}
