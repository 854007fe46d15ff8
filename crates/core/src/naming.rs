//! Character name normalization.
//!
//! Character names are the lookup key for training pages, so every write
//! and every lookup goes through [`normalize_character_name`]. The unique
//! constraint on `character.name` then makes names case-insensitive.

use crate::error::CoreError;

/// Longest accepted character name, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Trim and lowercase a character name.
///
/// Rejects names that are empty after trimming or longer than
/// [`MAX_NAME_LEN`].
///
/// # Examples
///
/// ```
/// use trainer_core::naming::normalize_character_name;
///
/// assert_eq!(normalize_character_name("  Mario ").unwrap(), "mario");
/// assert!(normalize_character_name("   ").is_err());
/// ```
pub fn normalize_character_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Character name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Character name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_lowercase())
}

/// Display name for a new character: the caller's value if non-blank,
/// otherwise the submitted name as typed (trimmed).
pub fn display_name_or_default(display_name: Option<&str>, submitted_name: &str) -> String {
    display_name
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| submitted_name.trim())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_mixed_case() {
        assert_eq!(normalize_character_name("Mario").unwrap(), "mario");
        assert_eq!(normalize_character_name("MARIO").unwrap(), "mario");
        assert_eq!(normalize_character_name("mario").unwrap(), "mario");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_character_name("\tFalco \n").unwrap(), "falco");
    }

    #[test]
    fn keeps_inner_spaces() {
        assert_eq!(
            normalize_character_name("Ice Climbers").unwrap(),
            "ice climbers"
        );
    }

    #[test]
    fn rejects_blank_name() {
        let err = normalize_character_name("   ").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_overlong_name() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert!(normalize_character_name(&long).is_err());

        let exact = "a".repeat(MAX_NAME_LEN);
        assert!(normalize_character_name(&exact).is_ok());
    }

    #[test]
    fn display_name_falls_back_to_submitted_name() {
        assert_eq!(display_name_or_default(None, " Mario "), "Mario");
        assert_eq!(display_name_or_default(Some("  "), "Mario"), "Mario");
        assert_eq!(
            display_name_or_default(Some("Dr. Mario"), "mario"),
            "Dr. Mario"
        );
    }
}
