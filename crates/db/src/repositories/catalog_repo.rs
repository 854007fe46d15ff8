//! Whole-catalog diagnostic reads.

use serde::Serialize;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::character::Character;
use crate::models::lesson::Lesson;
use crate::repositories::{CharacterRepo, LessonRepo};

/// Line placed between the character rows and the lesson rows of a dump.
pub const DUMP_SEPARATOR: &str = "-------------------------------------------------------";

/// Row counts plus whether the basic-training character is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub characters: i64,
    pub lessons: i64,
    pub has_basic_training: bool,
}

pub struct CatalogRepo;

impl CatalogRepo {
    /// Every character row, then [`DUMP_SEPARATOR`], then every lesson row,
    /// each formatted as one `|`-separated line for human inspection.
    pub async fn dump_all(pool: &PgPool) -> Result<Vec<String>, StoreError> {
        let characters = CharacterRepo::list_all(pool).await?;
        let lessons = LessonRepo::list_all(pool).await?;

        let mut lines = Vec::with_capacity(characters.len() + lessons.len() + 1);
        lines.extend(characters.iter().map(format_character));
        lines.push(DUMP_SEPARATOR.to_string());
        lines.extend(lessons.iter().map(format_lesson));
        Ok(lines)
    }

    /// Summarize the catalog in one round trip. `basic_name` is the
    /// character whose lessons make up basic training.
    pub async fn summary(pool: &PgPool, basic_name: &str) -> Result<CatalogSummary, StoreError> {
        let (characters, lessons, has_basic_training): (i64, i64, bool) = sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM character),
                    (SELECT COUNT(*) FROM lesson),
                    EXISTS (SELECT 1 FROM character WHERE name = $1)",
        )
        .bind(basic_name)
        .fetch_one(pool)
        .await?;

        Ok(CatalogSummary {
            characters,
            lessons,
            has_basic_training,
        })
    }
}

fn format_character(c: &Character) -> String {
    format!("{} | {} | {} | {}", c.id, c.name, c.display_name, c.icon)
}

fn format_lesson(l: &Lesson) -> String {
    format!(
        "{} | {} | {} | {} | {} | {} | {} | {} | {}",
        l.id,
        l.name,
        l.character_id,
        l.number,
        l.gif,
        l.description,
        l.learning_time_seconds,
        l.training_time_seconds,
        l.test_time_seconds
    )
}
