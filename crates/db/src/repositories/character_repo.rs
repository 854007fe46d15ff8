//! Repository for the `character` table.

use sqlx::PgPool;
use trainer_core::naming::{display_name_or_default, normalize_character_name};

use crate::error::{is_unique_violation, StoreError};
use crate::models::character::{Character, CreateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "character_id AS id, name, display_name, icon";

/// Lookup and insert operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a character, returning the created row.
    ///
    /// The name is normalized (trimmed, lowercased) before it is written.
    /// Uniqueness is left to the `character.name` constraint: a violation
    /// comes back as [`StoreError::DuplicateName`], so two concurrent
    /// inserts of the same name cannot both succeed.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, StoreError> {
        let name = normalize_character_name(&input.name)?;
        let display_name = display_name_or_default(input.display_name.as_deref(), &input.name);
        let icon = input.icon.as_deref().map(str::trim).unwrap_or_default();

        let query = format!(
            "INSERT INTO character (name, display_name, icon)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&name)
            .bind(&display_name)
            .bind(icon)
            .fetch_one(pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    StoreError::DuplicateName(name.clone())
                } else {
                    StoreError::from(err)
                }
            })
    }

    /// Find the single character whose name equals `name` exactly.
    ///
    /// Returns [`StoreError::NotFound`] when nothing matches and
    /// [`StoreError::AmbiguousResult`] when more than one row does.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Character, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM character WHERE name = $1 LIMIT 2");
        let mut rows = sqlx::query_as::<_, Character>(&query)
            .bind(name)
            .fetch_all(pool)
            .await?;

        match rows.len() {
            0 => Err(StoreError::NotFound {
                entity: "Character",
                key: name.to_string(),
            }),
            1 => Ok(rows.remove(0)),
            count => Err(StoreError::AmbiguousResult {
                entity: "Character",
                key: name.to_string(),
                count,
            }),
        }
    }

    /// List every character ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Character>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM character ORDER BY character_id ASC");
        let rows = sqlx::query_as::<_, Character>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
