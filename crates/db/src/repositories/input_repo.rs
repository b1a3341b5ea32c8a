//! Repository for the `inputs` table.

use mathmotion_core::types::DbId;
use sqlx::PgPool;

use crate::models::input::{CreateInput, InputRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, input, python_script, rating, feedback, created_at, updated_at";

/// CRUD operations for submissions.
pub struct InputRepo;

impl InputRepo {
    /// Insert a new submission.
    ///
    /// Blank `input` or `python_script` fails the write at the database
    /// CHECK constraint; nothing is coerced.
    pub async fn create(pool: &PgPool, input: &CreateInput) -> Result<InputRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO inputs (input, python_script)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InputRecord>(&query)
            .bind(&input.input)
            .bind(&input.python_script)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InputRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inputs WHERE id = $1");
        sqlx::query_as::<_, InputRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Attach rating and/or feedback to a submission. Only non-`None`
    /// fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_feedback(
        pool: &PgPool,
        id: DbId,
        rating: Option<i32>,
        feedback: Option<&str>,
    ) -> Result<Option<InputRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE inputs SET
                rating = COALESCE($2, rating),
                feedback = COALESCE($3, feedback),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InputRecord>(&query)
            .bind(id)
            .bind(rating)
            .bind(feedback)
            .fetch_optional(pool)
            .await
    }

    /// Count all submissions. Used by tests to assert side effects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM inputs")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
