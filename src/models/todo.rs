use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Status of a todo item. Stored and serialized as kebab-case text
/// (`pending`, `in-progress`, `completed`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    Pending,
    InProgress,
    Completed,
}

impl Default for TodoStatus {
    fn default() -> Self {
        TodoStatus::Pending
    }
}

/// Priority of a todo item. Stored and serialized as lowercase text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TodoPriority {
    Low,
    Medium,
    High,
}

impl Default for TodoPriority {
    fn default() -> Self {
        TodoPriority::Medium
    }
}

/// Input structure for creating or updating a todo item.
///
/// `status` and `priority` fall back to their defaults when omitted, so a
/// partial update never nulls those columns out.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TodoInput {
    /// Title of the todo. Required and non-empty.
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[serde(default)]
    pub status: TodoStatus,

    #[serde(default)]
    pub priority: TodoPriority,

    pub due_date: Option<NaiveDate>,
}

/// A todo row as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    /// Identifier of the owning user. Every exposed operation is scoped to it.
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}
