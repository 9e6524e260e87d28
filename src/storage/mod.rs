//! Storage layer
//!
//! Durable storage for chore records using SQLite:
//! - Embedded migrations keyed on `PRAGMA user_version`
//! - A single connection behind a mutex, so mutations (and in particular
//!   id assignment) are serialized even under concurrent callers

mod schema;
mod store;

pub use schema::SCHEMA_VERSION;
pub use store::ChoreStore;
