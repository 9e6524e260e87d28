//! Chore model
//!
//! A chore is the sole entity in the system: a flat record with a title,
//! an optional description, a completion flag, a priority and timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chore - a single task record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chore {
    /// Unique identifier, assigned by the store, never reused or mutated
    pub id: i64,

    /// What needs to be done (never empty)
    pub title: String,

    /// Optional free-form context (empty string when unset)
    pub description: String,

    /// Whether the chore has been completed
    pub completed: bool,

    /// Priority level
    pub priority: Priority,

    /// When this chore was created (set once)
    pub created_at: DateTime<Utc>,

    /// When this chore was last mutated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a chore
#[derive(Debug, Clone, Default)]
pub struct NewChore {
    /// Chore title (validated non-empty by the store)
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional priority (medium when omitted)
    pub priority: Option<Priority>,
}

/// Partial update of a chore - only supplied fields change
#[derive(Debug, Clone, Default)]
pub struct ChoreUpdate {
    /// New title (validated non-empty by the store)
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New priority
    pub priority: Option<Priority>,
    /// New completion state
    pub completed: Option<bool>,
}

impl ChoreUpdate {
    /// Returns `true` if no field is being changed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.completed.is_none()
    }
}

/// Chore priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal priority (default)
    #[default]
    Medium,
    /// Should be done soon
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("invalid priority: {s}. Use: low, medium, high")),
        }
    }
}
