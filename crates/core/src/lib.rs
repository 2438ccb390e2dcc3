//! Domain-level building blocks shared by the db and api crates.

pub mod error;
pub mod normalize;
pub mod roles;
pub mod types;
