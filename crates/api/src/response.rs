//! Shared response envelope types for API handlers.
//!
//! All success responses use the `{ "success": true, "data": ... }` envelope
//! the gallery client and the rendering pipeline already consume. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!` to get
//! compile-time type safety and consistent serialization.

use mathmotion_db::models::input::InputRecord;
use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response for a completed submission: the persisted record plus the
/// rendering script's captured stdout.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub data: InputRecord,
    #[serde(rename = "pythonOutput")]
    pub python_output: String,
}
