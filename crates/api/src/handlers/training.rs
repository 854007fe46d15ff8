//! Handlers for the catalog-backed training pages.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Html;
use trainer_core::error::CoreError;
use trainer_core::naming::normalize_character_name;
use trainer_db::repositories::{CharacterRepo, LessonRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{compose, render_page};

/// GET /basic/
pub async fn basic(State(state): State<AppState>) -> AppResult<Html<String>> {
    let character = CharacterRepo::find_by_name(&state.pool, compose::BASIC_CHARACTER).await?;
    let lessons = LessonRepo::list_by_character(&state.pool, character.id).await?;
    Ok(render_page(&compose::basic_training(character, lessons)))
}

/// GET /training/{name}
///
/// The name is normalized before lookup, so `/training/Falco` and
/// `/training/falco` show the same page.
pub async fn by_character(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Html<String>> {
    let name = lookup_name(&name)?;
    let character = CharacterRepo::find_by_name(&state.pool, &name).await?;
    let lessons = LessonRepo::list_by_character(&state.pool, character.id).await?;
    tracing::debug!(character_id = character.id, lessons = lessons.len(), "Composed training list");
    Ok(render_page(&compose::training_list(character, lessons)))
}

/// GET /lesson/{character}/{number}
pub async fn lesson(
    State(state): State<AppState>,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> AppResult<Html<String>> {
    let Path((name, number)) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let name = lookup_name(&name)?;
    let character = CharacterRepo::find_by_name(&state.pool, &name).await?;
    let lessons = LessonRepo::list_by_character(&state.pool, character.id).await?;
    let page = compose::lesson_detail(&character, lessons, number)?;
    Ok(render_page(&page))
}

/// Normalize a name taken from the URL. A name that could never have been
/// stored is reported as a missing character.
fn lookup_name(raw: &str) -> Result<String, CoreError> {
    normalize_character_name(raw).map_err(|_| CoreError::not_found("Character", raw))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn lookup_name_lowercases() {
        assert_eq!(lookup_name(" Falco ").unwrap(), "falco");
    }

    #[test]
    fn overlong_or_blank_lookup_is_not_found() {
        let long = "a".repeat(65);
        assert_matches!(
            lookup_name(&long),
            Err(CoreError::NotFound { entity: "Character", .. })
        );
        assert_matches!(lookup_name("  "), Err(CoreError::NotFound { .. }));
    }
}
