//! Shared helpers for API integration tests.
//!
//! Tests exercise the real router (same middleware stack as production)
//! in-process via `tower::ServiceExt::oneshot`. The generation invoker is
//! pointed at a `/bin/sh` stub script so the subprocess path runs for real
//! without Python or the rendering toolchain installed.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mathmotion_api::config::{GenerationSettings, ServerConfig};
use mathmotion_api::router::build_app_router;
use mathmotion_api::state::AppState;
use mathmotion_core::generation::{Invoker, InvokerConfig};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// `video_dir` becomes the sole content root; `script_path` is the stub
/// generation script (run with `/bin/sh`).
pub fn test_config(video_dir: &Path, script_path: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        video_dirs: vec![video_dir.to_path_buf()],
        generation: GenerationSettings {
            python_bin: "/bin/sh".to_string(),
            script_path: script_path.to_string_lossy().into_owned(),
            timeout_secs: 10,
            max_concurrent: 2,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and config.
pub fn build_test_app(pool: PgPool, config: ServerConfig) -> Router {
    let invoker = Arc::new(Invoker::new(InvokerConfig {
        python_bin: config.generation.python_bin.clone(),
        script_path: config.generation.script_path.clone(),
        timeout: Duration::from_secs(config.generation.timeout_secs),
        max_concurrent: config.generation.max_concurrent,
    }));

    build_app_router(AppState {
        pool,
        config: Arc::new(config),
        invoker,
    })
}

/// Convenience: test app with a throwaway content root and an `echo done`
/// generation stub, for tests that don't care about either.
pub fn build_default_app(pool: PgPool, dir: &tempfile::TempDir) -> Router {
    let script = write_script(dir, "echo done");
    build_test_app(pool, test_config(dir.path(), &script))
}

/// Write a stub generation script into `dir` and return its path.
pub fn write_script(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("generate.sh");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a GET request with a Range header.
pub async fn get_range(app: Router, uri: &str, range: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::RANGE, range)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Assert a response is the standard error envelope with the given status.
pub async fn assert_error_envelope(
    response: Response<Body>,
    status: StatusCode,
) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    json
}
