//! # Domain models for workspace resources
//!
//! Defines the record types held by every [`crate::ResourceStore`] and returned
//! by the collaborator services. These types are `Serialize + Deserialize` so
//! they can cross the server/client boundary via Dioxus server functions.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`FileRecord`] | An uploaded file's metadata. The byte content stays server-side and is fetched on download. |
//! | [`NoteRecord`] | A free-form note. `updated_at` advances on every edit. |
//! | [`PhotoRecord`] | An uploaded image, bytes included (the gallery renders them inline). `album_id` is an optional back-reference, not ownership. |
//! | [`AlbumRecord`] | A named photo album. Deleting an album moves its photos back to the main gallery. |
//! | [`TaskRecord`] | A todo item with a closed [`TaskStatus`] and an optional due date. |
//! | [`ExpenseRecord`] | A spend entry. `amount` is non-negative by convention, not enforced here. |
//! | [`UserInfo`] | The client-safe projection of an account — never carries the password hash. |
//!
//! All ids are assigned by the collaborator, never client-generated. All
//! timestamps are epoch milliseconds (UTC).

use serde::{Deserialize, Serialize};

/// Metadata for a stored file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: u64,
    pub name: String,
    pub content_type: String,
    /// Size in bytes, immutable after upload.
    pub size: u64,
    pub created_at: i64,
}

/// A note with title and body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// An uploaded photo, including its bytes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: u64,
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub created_at: i64,
    pub size: u64,
    /// Album back-reference. `None` means the main gallery.
    pub album_id: Option<u64>,
}

/// A photo album.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub id: u64,
    pub name: String,
    pub created_at: i64,
}

/// Task lifecycle state. Closed enumeration; the wire strings
/// (`todo`/`inProgress`/`done`) double as filter keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "inProgress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// Every status, in display order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// The wire/filter key for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::Done => "done",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Parse a wire/filter key back into a status.
    pub fn parse(s: &str) -> Option<TaskStatus> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "inProgress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// A task owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Epoch ms, midnight UTC of the due day. `None` means no due date.
    pub due_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    /// Id of the owning account.
    pub owner: String,
}

/// A tracked expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: u64,
    pub amount: f64,
    /// Free-text category label ("Food", "Transport", ...).
    pub category: String,
    pub description: String,
    /// Epoch ms of the expense day.
    pub date: i64,
}

/// Account information safe to send to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserInfo {
    /// "First Last", falling back to the username when both are empty.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}
