//! Admin authorization primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`gate`] -- the single-secret admin check guarding write endpoints.

pub mod gate;
pub mod password;
