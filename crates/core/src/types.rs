/// Catalog primary keys are PostgreSQL SERIAL columns.
pub type DbId = i32;
