//! Data models

mod chore;

pub use chore::{Chore, ChoreUpdate, NewChore, Priority};
