//! Wire and domain types for the todos collection.
//!
//! JSON field names are `snake_case`, matching the backing store's columns.
//! Everything here is plain data: construction helpers, no behavior beyond
//! the sort/filter vocabulary the rest of the workspace shares.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Identifiers
// ═══════════════════════════════════════════════════════════════════════════

/// Todo identifier
///
/// An opaque string. Server-assigned ids use whatever format the backing
/// store's primary key has. While an optimistic create is in flight the
/// client holds a temporary id prefixed `temp-`; temporary ids exist only
/// client-side and are never valid in an id-addressed request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wrap a server-assigned id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a temporary id from a generated suffix
    #[must_use]
    pub fn temporary(suffix: &str) -> Self {
        Self(format!("temp-{suffix}"))
    }

    /// Whether this id was minted client-side for a pending create
    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.0.starts_with("temp-")
    }

    /// The id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Records
// ═══════════════════════════════════════════════════════════════════════════

/// Priority of a todo
///
/// Wire values are `"high"`, `"medium"`, `"low"`. An absent or unrecognized
/// value deserializes as [`Priority::Medium`], so garbage from the backend is
/// never representable in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention first
    High,
    /// Whenever
    Low,
    /// The default
    #[default]
    #[serde(other)]
    Medium,
}

impl Priority {
    /// Sort rank: high before medium before low
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// The wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A todo record
///
/// `title` is never empty or whitespace-only: the create path trims and
/// rejects blank titles before a record exists, and updates drop blank
/// title changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier; temporary while an optimistic create is in flight
    pub id: TodoId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Completion flag, `false` on create
    #[serde(default)]
    pub completed: bool,
    /// Assigned by the server (or the client clock for a provisional record)
    pub created_at: DateTime<Utc>,
    /// Defaults to medium when the backend omits it
    #[serde(default)]
    pub priority: Priority,
    /// Optional deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Optional free-form label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Aggregate counts over the collection
///
/// Also the shape of the backend's `/todos/stats` response, which serializes
/// `highPriority` in camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStats {
    /// All records
    pub total: usize,
    /// Records with `completed == true`
    pub completed: usize,
    /// Records with `completed == false`
    pub pending: usize,
    /// High-priority records that are not completed
    pub high_priority: usize,
}

// ═══════════════════════════════════════════════════════════════════════════
// Write payloads
// ═══════════════════════════════════════════════════════════════════════════

/// Payload for creating a todo
///
/// The server assigns `id` and `created_at` and starts the record with
/// `completed == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    /// Title; the server trims it and rejects blanks
    pub title: String,
    /// Defaults to medium when omitted
    #[serde(default)]
    pub priority: Priority,
    /// Optional deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Optional free-form label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewTodo {
    /// Create a payload with the given title and defaults everywhere else
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: Priority::default(),
            due_date: None,
            category: None,
        }
    }

    /// Set the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Partial update for a todo
///
/// Every field is optional. For the nullable fields the nested option
/// distinguishes "leave unchanged" (outer `None`, omitted from the JSON)
/// from "clear" (`Some(None)`, serialized as `null`).
///
/// Serialize-only: patches travel to the server, never back.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TodoPatch {
    /// Replace the title (trimmed server-side)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replace the completion flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Replace the priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Set or clear the due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Set or clear the category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
}

impl TodoPatch {
    /// An empty patch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the completion flag
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Replace the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set (`Some`) or clear (`None`) the due date
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set (`Some`) or clear (`None`) the category
    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = Some(category);
        self
    }

    /// Whether the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.category.is_none()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Query and view vocabulary
// ═══════════════════════════════════════════════════════════════════════════

/// Completion filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every record
    #[default]
    All,
    /// Only `completed == false`
    Active,
    /// Only `completed == true`
    Completed,
}

impl StatusFilter {
    /// The `status` query parameter value; `All` sends none
    #[must_use]
    pub const fn as_query_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Active => Some("active"),
            Self::Completed => Some("completed"),
        }
    }

    /// Whether a record with this completion flag passes the filter
    #[must_use]
    pub const fn matches(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }
}

/// Client-side sort order for derived views
///
/// The server always returns newest-first; re-ordering is a client concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first (the default)
    #[default]
    Created,
    /// Soonest deadline first; records without one sort last
    DueDate,
    /// High, then medium, then low
    Priority,
}

/// Parameters for the list operation
///
/// The default lists everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    /// Completion filter; `All` is not sent on the wire
    pub status: StatusFilter,
    /// Only this priority, when set
    pub priority: Option<Priority>,
    /// Case-insensitive title substring, when set
    pub search: Option<String>,
}

impl ListQuery {
    /// A query that lists everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by completion status
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Filter by priority
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Filter by title substring
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}
