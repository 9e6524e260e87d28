//! HTTP-agnostic API layer
//!
//! Typed request structures and pure business logic handlers that can be
//! used by any HTTP server implementation or directly by tests.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take the store and typed input,
//!   return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for
//!   translation by the server adapter

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ErrorCode};
pub use handlers::{
    create_chore, delete_chore, get_chore, health, list_chores, update_chore,
};
pub use types::{CreateChoreRequest, DeleteData, HealthData, UpdateChoreRequest};
