//! To-do item domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered as one row of the list.
//! - Provide the value-semantic `completed` transition.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `done` starts `false` and is one-way; nothing in the model un-marks it.
//! - `created_at_ms` is captured once at creation and never changes.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a to-do item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Rows are always addressed by this id, never by display position, so an
/// id captured at render time stays valid across interleaved mutations.
pub type TodoId = Uuid;

/// One titled task with a completion flag and creation timestamp.
///
/// Titles are arbitrary text; the empty string is a legal title and no
/// validation is performed anywhere in core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Stable id used for row addressing across the FFI boundary.
    pub id: TodoId,
    /// Display text; arbitrary, may be empty.
    pub title: String,
    /// Completion flag; `false` at creation, one-way once set.
    pub done: bool,
    /// Unix epoch milliseconds captured when the item was created.
    pub created_at: i64,
}

impl TodoItem {
    /// Creates a new open item with a generated stable id and the current
    /// time as creation timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, now_epoch_ms())
    }

    /// Creates an item with caller-provided id and creation time.
    ///
    /// Used by tests and by callers replaying externally created rows.
    pub fn with_id(id: TodoId, title: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
            created_at,
        }
    }

    /// Returns a copy of this item with `done = true`.
    ///
    /// The container replaces the stored value with the returned one, so a
    /// state transition never mutates a shared item in place. Applying this
    /// to an already-done item returns an identical value.
    #[must_use]
    pub fn completed(&self) -> Self {
        Self {
            done: true,
            ..self.clone()
        }
    }

    /// Returns whether the item still accepts a done transition.
    pub fn is_open(&self) -> bool {
        !self.done
    }
}

/// Current time as Unix epoch milliseconds.
///
/// Saturates to 0 for clocks before the epoch rather than panicking.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
