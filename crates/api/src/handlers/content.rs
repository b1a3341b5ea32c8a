//! Static video serving from the configured content roots.
//!
//! Lookup walks the roots in their configured order and the first root
//! holding the requested file wins. A request is rejected before any
//! filesystem access if it could resolve outside the roots.

use std::path::{Component, Path as FsPath, PathBuf};

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{self, HeaderMap};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Slice size for open-ended range requests (`bytes=N-`), 1 MiB. Browsers
/// follow up with the next range themselves.
const OPEN_RANGE_CHUNK: u64 = 1024 * 1024;

/// Content-Type by extension. The roots hold rendered animations, so only
/// video containers get a real type; anything else is an opaque download.
fn mime_for(path: &FsPath) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

/// Reduce a requested path to plain normal components.
///
/// Anything containing a root, prefix, or `..` component yields `None`, so
/// the later `root.join(...)` cannot climb out of a content root.
fn sanitize_request_path(requested: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in FsPath::new(requested).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if clean.as_os_str().is_empty() {
        return None;
    }
    Some(clean)
}

/// First root that holds `relative` as a regular file.
async fn resolve_in_roots(roots: &[PathBuf], relative: &FsPath) -> Option<PathBuf> {
    for root in roots {
        let candidate = root.join(relative);
        match tokio::fs::metadata(&candidate).await {
            Ok(meta) if meta.is_file() => return Some(candidate),
            _ => continue,
        }
    }
    None
}

/// Parse `bytes=START-END` (END optional) into `(start, Option<end>)`.
fn parse_byte_range(value: &str) -> Option<(u64, Option<u64>)> {
    let (start, end) = value.strip_prefix("bytes=")?.split_once('-')?;
    let start = start.parse::<u64>().ok()?;
    let end = match end {
        "" => None,
        e => Some(e.parse::<u64>().ok()?),
    };
    Some((start, end))
}

/// Bare 404. Video elements probe aggressively for missing files, so they
/// get an empty body rather than a JSON envelope.
fn not_found() -> Response {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::empty())
        .unwrap()
}

/// GET /videos-content/{*path}
///
/// Streams a file from the content roots, honoring `Range` requests.
pub async fn serve_content(
    State(state): State<AppState>,
    Path(requested): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let Some(relative) = sanitize_request_path(&requested) else {
        tracing::warn!(path = %requested, "Content request rejected by path containment");
        return Ok(not_found());
    };

    let Some(file_path) = resolve_in_roots(&state.config.video_dirs, &relative).await else {
        return Ok(not_found());
    };

    let file_size = tokio::fs::metadata(&file_path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .len();
    let mime = mime_for(&file_path);

    let range = headers
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_byte_range);

    match range {
        Some((start, end)) => serve_range(&file_path, file_size, mime, start, end).await,
        None => serve_full(&file_path, file_size, mime).await,
    }
}

async fn serve_full(path: &FsPath, file_size: u64, mime: &'static str) -> AppResult<Response> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime)
        .header(header::CONTENT_LENGTH, file_size.to_string())
        .header(header::ACCEPT_RANGES, "bytes")
        .body(Body::from_stream(ReaderStream::new(file)))
        .unwrap())
}

async fn serve_range(
    path: &FsPath,
    file_size: u64,
    mime: &'static str,
    start: u64,
    end: Option<u64>,
) -> AppResult<Response> {
    let last = file_size.saturating_sub(1);
    let end = match end {
        Some(e) => e.min(last),
        // Open-ended: answer with one chunk, not the whole tail.
        None => start.saturating_add(OPEN_RANGE_CHUNK - 1).min(last),
    };

    if start >= file_size || start > end {
        return Ok(Response::builder()
            .status(StatusCode::RANGE_NOT_SATISFIABLE)
            .header(header::CONTENT_RANGE, format!("bytes */{file_size}"))
            .body(Body::empty())
            .unwrap());
    }

    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    file.seek(std::io::SeekFrom::Start(start))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let length = end - start + 1;
    let slice = file.take(length);

    Ok(Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(header::CONTENT_TYPE, mime)
        .header(header::CONTENT_LENGTH, length.to_string())
        .header(
            header::CONTENT_RANGE,
            format!("bytes {start}-{end}/{file_size}"),
        )
        .header(header::ACCEPT_RANGES, "bytes")
        .body(Body::from_stream(ReaderStream::new(slice)))
        .unwrap())
}

/// One configured content root and the files it currently holds.
#[derive(Debug, Serialize)]
pub struct ContentRootListing {
    pub path: String,
    pub exists: bool,
    pub files: Vec<String>,
}

/// GET /check-videos
///
/// Diagnostic listing of the content roots. Answers "is the server actually
/// looking where the renderer writes" without shell access to the host.
pub async fn check_videos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut listings = Vec::with_capacity(state.config.video_dirs.len());

    for root in &state.config.video_dirs {
        let mut files = Vec::new();
        let exists = match tokio::fs::read_dir(root).await {
            Ok(mut entries) => {
                while let Ok(Some(entry)) = entries.next_entry().await {
                    files.push(entry.file_name().to_string_lossy().into_owned());
                }
                files.sort();
                true
            }
            Err(_) => false,
        };
        listings.push(ContentRootListing {
            path: root.to_string_lossy().into_owned(),
            exists,
            files,
        });
    }

    Ok(Json(DataResponse::new(listings)))
}
