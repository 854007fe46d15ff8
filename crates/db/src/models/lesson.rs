//! Lesson entity model and DTOs.

use sqlx::FromRow;
use trainer_core::types::DbId;

/// A row from the `lesson` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Lesson {
    pub id: DbId,
    pub character_id: DbId,
    pub name: String,
    /// Position within the character's training list.
    pub number: i32,
    /// URL of the demonstration gif.
    pub gif: String,
    pub description: String,
    pub learning_time_seconds: i32,
    pub training_time_seconds: i32,
    pub test_time_seconds: i32,
}

/// DTO for inserting a lesson. Lessons are loaded out-of-band; there is no
/// HTTP endpoint that creates them.
#[derive(Debug, Clone)]
pub struct CreateLesson {
    pub character_id: DbId,
    pub name: String,
    pub number: i32,
    pub gif: String,
    pub description: String,
    pub learning_time_seconds: i32,
    pub training_time_seconds: i32,
    pub test_time_seconds: i32,
}
