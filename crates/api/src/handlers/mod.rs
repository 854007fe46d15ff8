//! Request handlers, grouped by the part of the site they serve.

pub mod admin;
pub mod fallback;
pub mod pages;
pub mod training;
