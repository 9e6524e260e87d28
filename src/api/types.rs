//! API request and response types
//!
//! Priority arrives as a plain string and is parsed by the handlers, so an
//! invalid value produces a field-level 400 instead of a JSON parse error.

use serde::{Deserialize, Serialize};

/// Request body for creating a chore
#[derive(Debug, Deserialize)]
pub struct CreateChoreRequest {
    /// Chore title (required, non-empty)
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional priority (low, medium, high)
    #[serde(default)]
    pub priority: Option<String>,
}

/// Request body for updating a chore (any subset of fields)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateChoreRequest {
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// New priority (low, medium, high)
    #[serde(default)]
    pub priority: Option<String>,
    /// New completion state
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Response body for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteData {
    /// Confirmation message
    pub message: String,
}

/// Response body for the health endpoint
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthData {
    /// Always "ok" once the server is accepting requests
    pub status: &'static str,
}
