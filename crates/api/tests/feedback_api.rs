//! Integration tests for submission feedback (POST /feedback).

mod common;

use axum::http::StatusCode;
use mathmotion_db::models::input::CreateInput;
use mathmotion_db::repositories::InputRepo;
use sqlx::PgPool;

async fn seed_input(pool: &PgPool) -> i64 {
    InputRepo::create(
        pool,
        &CreateInput {
            input: "gradient descent".to_string(),
            python_script: "manim/main.py".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

/// A valid rating and feedback text land on the record.
#[sqlx::test(migrations = "../db/migrations")]
async fn rating_and_feedback_are_recorded(pool: PgPool) {
    let id = seed_input(&pool).await;
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_default_app(pool.clone(), &dir);

    let response = common::post_json(
        app,
        "/feedback",
        serde_json::json!({"inputId": id, "rating": 5, "feedback": "crisp animation"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["rating"], 5);
    assert_eq!(json["data"]["feedback"], "crisp animation");

    let record = InputRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(record.rating, Some(5));
}

/// An out-of-range rating is rejected before touching the store.
#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_rating_is_rejected(pool: PgPool) {
    let id = seed_input(&pool).await;
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_default_app(pool.clone(), &dir);

    let response = common::post_json(
        app,
        "/feedback",
        serde_json::json!({"inputId": id, "rating": 9}),
    )
    .await;

    common::assert_error_envelope(response, StatusCode::BAD_REQUEST).await;

    let record = InputRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(record.rating, None, "rejected rating must not be stored");
}

/// Feedback against an unknown submission is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_input_is_404(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_default_app(pool, &dir);

    let response = common::post_json(
        app,
        "/feedback",
        serde_json::json!({"inputId": 999999, "rating": 3}),
    )
    .await;

    common::assert_error_envelope(response, StatusCode::NOT_FOUND).await;
}
