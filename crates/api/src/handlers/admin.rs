//! Handlers for the admin surface: database dump, sign-in, add-character.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Form, Json};
use serde::Deserialize;
use trainer_db::models::character::CreateCharacter;
use trainer_db::repositories::{CatalogRepo, CharacterRepo};

use crate::auth::gate::Verdict;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{compose, render_page};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /signin`.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub password: String,
}

/// Form body for `POST /addchar`.
///
/// Every field is optional at the parsing stage so that a missing field
/// becomes a 400 with a useful message rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct AddCharacterForm {
    pub name: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub icon: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /db
pub async fn dump(State(state): State<AppState>) -> AppResult<Html<String>> {
    let lines = CatalogRepo::dump_all(&state.pool).await?;
    Ok(render_page(&compose::database_dump(lines)))
}

/// POST /signin
///
/// 200 when the password matches, 401 when it does not, 400 when the body
/// is not `{"password": "..."}`.
pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    match state.gate.verify(&input.password) {
        Verdict::Allowed => Ok(StatusCode::OK),
        Verdict::Denied => {
            tracing::warn!("Admin sign-in denied");
            Err(AppError::Denied)
        }
    }
}

/// POST /addchar
///
/// Checks the admin password, then inserts the character. A name that is
/// already taken (case-insensitively) is reported by the store's unique
/// constraint, not by a prior lookup.
pub async fn add_character(
    State(state): State<AppState>,
    form: Result<Form<AddCharacterForm>, FormRejection>,
) -> AppResult<Html<String>> {
    let Form(form) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let name = required(form.name, "name")?;
    let password = required(form.password, "password")?;

    if state.gate.verify(&password) == Verdict::Denied {
        tracing::warn!("Add-character denied");
        return Err(AppError::Denied);
    }

    let input = CreateCharacter {
        name,
        display_name: form.display_name,
        icon: form.icon,
    };
    let character = CharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(character_id = character.id, name = %character.name, "Added character");

    Ok(render_page(&compose::character_added()))
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing form field '{field}'")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn missing_field_is_bad_request() {
        let err = required(None, "password").unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg.contains("password"));
    }

    #[test]
    fn empty_field_is_still_present() {
        assert_eq!(required(Some(String::new()), "password").unwrap(), "");
    }
}
