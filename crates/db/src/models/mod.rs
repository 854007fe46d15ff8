//! Row structs and create DTOs for the catalog tables.

pub mod character;
pub mod lesson;
