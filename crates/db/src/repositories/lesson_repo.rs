//! Repository for the `lesson` table.

use sqlx::PgPool;
use trainer_core::types::DbId;

use crate::error::StoreError;
use crate::models::lesson::{CreateLesson, Lesson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "lesson_id AS id, character_id, name, number, gif, description, \
     learning_time_seconds, training_time_seconds, test_time_seconds";

/// Read and seed operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// Insert a lesson, returning the created row.
    ///
    /// Fails with a foreign-key violation if `character_id` does not exist.
    pub async fn create(pool: &PgPool, input: &CreateLesson) -> Result<Lesson, StoreError> {
        let query = format!(
            "INSERT INTO lesson (character_id, name, number, gif, description,
                                 learning_time_seconds, training_time_seconds, test_time_seconds)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let lesson = sqlx::query_as::<_, Lesson>(&query)
            .bind(input.character_id)
            .bind(&input.name)
            .bind(input.number)
            .bind(&input.gif)
            .bind(&input.description)
            .bind(input.learning_time_seconds)
            .bind(input.training_time_seconds)
            .bind(input.test_time_seconds)
            .fetch_one(pool)
            .await?;
        Ok(lesson)
    }

    /// List the lessons of one character, ordered by lesson number.
    ///
    /// A character without lessons yields an empty vector.
    pub async fn list_by_character(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Vec<Lesson>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM lesson
             WHERE character_id = $1
             ORDER BY number ASC, lesson_id ASC"
        );
        let rows = sqlx::query_as::<_, Lesson>(&query)
            .bind(character_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// List every lesson ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Lesson>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM lesson ORDER BY lesson_id ASC");
        let rows = sqlx::query_as::<_, Lesson>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
