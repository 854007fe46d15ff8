//! Character entity model and DTOs.

use sqlx::FromRow;
use trainer_core::types::DbId;

/// A row from the `character` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Character {
    pub id: DbId,
    /// Lowercased, unique lookup key.
    pub name: String,
    pub display_name: String,
    pub icon: String,
}

/// DTO for inserting a character.
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    /// Normalized before it is written.
    pub name: String,
    /// Defaults to `name` as submitted.
    pub display_name: Option<String>,
    /// Defaults to empty.
    pub icon: Option<String>,
}

impl CreateCharacter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            icon: None,
        }
    }
}
