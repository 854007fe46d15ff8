//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Caller-supplied values are
//! always bound as parameters, never formatted into query text.

pub mod catalog_repo;
pub mod character_repo;
pub mod lesson_repo;

pub use catalog_repo::CatalogRepo;
pub use character_repo::CharacterRepo;
pub use lesson_repo::LessonRepo;
