//! Pure API handlers
//!
//! These handlers contain the request-level logic and are HTTP-agnostic.
//! They take the store plus typed input and return `Result<T, ApiError>`.

use crate::models::{Chore, ChoreUpdate, NewChore, Priority};
use crate::storage::ChoreStore;

use super::error::ApiError;
use super::types::{CreateChoreRequest, DeleteData, HealthData, UpdateChoreRequest};

/// Health probe - reachable only once the store is open and the port bound
#[must_use]
pub const fn health() -> HealthData {
    HealthData { status: "ok" }
}

/// List all chores
pub fn list_chores(store: &ChoreStore) -> Result<Vec<Chore>, ApiError> {
    Ok(store.list()?)
}

/// Get a single chore by id
pub fn get_chore(store: &ChoreStore, id: i64) -> Result<Chore, ApiError> {
    Ok(store.get(id)?)
}

/// Create a new chore
pub fn create_chore(store: &ChoreStore, req: &CreateChoreRequest) -> Result<Chore, ApiError> {
    let priority = parse_priority(req.priority.as_deref())?;
    let new = NewChore {
        title: req.title.clone(),
        description: req.description.clone(),
        priority,
    };
    Ok(store.create(&new)?)
}

/// Update an existing chore (any non-empty subset of fields)
pub fn update_chore(
    store: &ChoreStore,
    id: i64,
    req: &UpdateChoreRequest,
) -> Result<Chore, ApiError> {
    let priority = parse_priority(req.priority.as_deref())?;
    let update = ChoreUpdate {
        title: req.title.clone(),
        description: req.description.clone(),
        priority,
        completed: req.completed,
    };
    if update.is_empty() {
        return Err(ApiError::bad_request("no fields to update"));
    }
    Ok(store.update(id, &update)?)
}

/// Delete a chore by id
pub fn delete_chore(store: &ChoreStore, id: i64) -> Result<DeleteData, ApiError> {
    store.delete(id)?;
    Ok(DeleteData {
        message: format!("Chore {id} deleted"),
    })
}

/// Parse an optional priority string, rejecting anything outside the enum
fn parse_priority(raw: Option<&str>) -> Result<Option<Priority>, ApiError> {
    raw.map(str::parse)
        .transpose()
        .map_err(|e: String| ApiError::bad_request(format!("priority: {e}")))
}
