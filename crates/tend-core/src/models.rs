//! Domain models for Tend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a todo
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

/// Partial update for a todo
///
/// `None` fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}
