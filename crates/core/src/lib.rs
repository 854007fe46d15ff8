//! Domain primitives shared by the trainer crates.
//!
//! Nothing in here performs I/O: persistence lives in `trainer-db` and the
//! HTTP surface in `trainer-api`.

pub mod dice;
pub mod error;
pub mod naming;
pub mod types;
